//! Constraint model
//!
//! The store accumulates what feedback revealed; the filter applies it to a
//! candidate pool.

mod filter;
mod store;

pub use filter::{apply, is_valid};
pub use store::{ConstraintStore, UpdateError, parse_turn};
