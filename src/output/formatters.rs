//! Formatting utilities for terminal output

use crate::constraints::ConstraintStore;
use crate::core::WORD_LENGTH;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Fixed letters by position, `_` where unknown
#[must_use]
pub fn known_positions(store: &ConstraintStore) -> String {
    (0..WORD_LENGTH)
        .map(|position| store.fixed_letter_at(position).map_or('_', char::from))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters as a sorted, comma separated list, `-` when empty
#[must_use]
pub fn letter_list(letters: impl IntoIterator<Item = u8>) -> String {
    let mut letters: Vec<char> = letters.into_iter().map(char::from).collect();
    if letters.is_empty() {
        return "-".to_string();
    }
    letters.sort_unstable();
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
