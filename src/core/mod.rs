//! Core domain types for Wordle
//!
//! Words and feedback patterns. Everything here is pure and has no
//! knowledge of sessions or scoring.

mod pattern;
mod word;

pub use pattern::{FeedbackError, FeedbackSymbol, Pattern, compute_feedback};
pub use word::{WORD_LENGTH, Word, WordError};
