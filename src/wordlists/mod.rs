//! Word lists for the solver
//!
//! A default list is compiled into the binary; any whitespace-separated
//! file can replace it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{EMBEDDED, WordListError, load};
