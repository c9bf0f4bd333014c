//! Accumulated knowledge from guess feedback
//!
//! The store records what every (guess, feedback) pair revealed about the
//! answer: fixed positions, letters known present, letters known absent and
//! positions a present letter cannot occupy.

use crate::core::{FeedbackError, FeedbackSymbol, Pattern, WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::debug;

/// Reasons an update is rejected
///
/// A rejected update leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("Guess and feedback must both be 5 long (got guess {guess}, feedback {feedback})")]
    InputLengthMismatch { guess: usize, feedback: usize },
    #[error("Invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
}

/// Validate a textual guess and feedback pair
///
/// # Errors
/// Returns `UpdateError::InputLengthMismatch` when either input is not
/// exactly five characters, or the word/feedback parse error otherwise.
pub fn parse_turn(guess: &str, feedback: &str) -> Result<(Word, Pattern), UpdateError> {
    let guess_len = guess.trim().chars().count();
    let feedback_len = feedback.trim().chars().count();
    if guess_len != WORD_LENGTH || feedback_len != WORD_LENGTH {
        return Err(UpdateError::InputLengthMismatch {
            guess: guess_len,
            feedback: feedback_len,
        });
    }

    Ok((Word::new(guess)?, Pattern::parse(feedback)?))
}

/// Constraints derived from all feedback seen in a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintStore {
    fixed_positions: [Option<u8>; WORD_LENGTH],
    present_letters: BTreeSet<u8>,
    excluded_letters: BTreeSet<u8>,
    position_exclusions: BTreeMap<u8, BTreeSet<usize>>,
}

impl ConstraintStore {
    /// Create an empty store that accepts every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed_positions.iter().all(Option::is_none)
            && self.present_letters.is_empty()
            && self.excluded_letters.is_empty()
            && self.position_exclusions.is_empty()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply a textual guess and feedback string
    ///
    /// Both inputs are validated before anything is recorded.
    ///
    /// # Errors
    /// Returns `UpdateError::InputLengthMismatch` when either input is not
    /// exactly five characters, or the word/feedback parse error otherwise.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::constraints::ConstraintStore;
    ///
    /// let mut store = ConstraintStore::new();
    /// assert!(store.update("CRAN", "00000").is_err());
    /// assert!(store.is_empty());
    ///
    /// store.update("crane", "20001").unwrap();
    /// assert_eq!(store.fixed_letter_at(0), Some(b'C'));
    /// assert!(store.excluded_letters().contains(&b'R'));
    /// ```
    pub fn update(&mut self, guess: &str, feedback: &str) -> Result<(), UpdateError> {
        let (guess, pattern) = parse_turn(guess, feedback)?;
        self.record(&guess, pattern);
        Ok(())
    }

    /// Record the feedback `pattern` received for `guess`
    ///
    /// An absent letter is only excluded globally when no other occurrence of
    /// it in the same guess was a match or misplaced. Otherwise the guess
    /// over-supplied a repeated letter and only that position is ruled out.
    pub fn record(&mut self, guess: &Word, pattern: Pattern) {
        let symbols = pattern.symbols();

        let letters_in_word: FxHashSet<u8> = guess
            .chars()
            .iter()
            .zip(symbols)
            .filter(|(_, symbol)| *symbol != FeedbackSymbol::Absent)
            .map(|(&letter, _)| letter)
            .collect();

        for (position, (&letter, symbol)) in guess.chars().iter().zip(symbols).enumerate() {
            match symbol {
                FeedbackSymbol::Match => {
                    self.fixed_positions[position] = Some(letter);
                    self.mark_present(letter);
                }
                FeedbackSymbol::Misplaced => {
                    self.mark_present(letter);
                    self.exclude_position(letter, position);
                }
                FeedbackSymbol::Absent => {
                    // Presence evidence from an earlier turn wins over a global exclusion
                    if letters_in_word.contains(&letter) || self.present_letters.contains(&letter)
                    {
                        self.exclude_position(letter, position);
                    } else {
                        self.excluded_letters.insert(letter);
                    }
                }
            }
        }

        debug!(
            guess = %guess,
            pattern = %pattern,
            fixed = self.fixed_positions().count(),
            present = self.present_letters.len(),
            excluded = self.excluded_letters.len(),
            "recorded feedback"
        );
    }

    fn mark_present(&mut self, letter: u8) {
        self.present_letters.insert(letter);
        self.excluded_letters.remove(&letter);
    }

    fn exclude_position(&mut self, letter: u8, position: usize) {
        self.position_exclusions
            .entry(letter)
            .or_default()
            .insert(position);
    }

    /// Letter known to occupy `position`, if any
    #[must_use]
    pub fn fixed_letter_at(&self, position: usize) -> Option<u8> {
        self.fixed_positions.get(position).copied().flatten()
    }

    /// All fixed (position, letter) pairs in position order
    pub fn fixed_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.fixed_positions
            .iter()
            .enumerate()
            .filter_map(|(position, letter)| letter.map(|l| (position, l)))
    }

    /// Letters confirmed to occur somewhere in the answer
    #[must_use]
    pub const fn present_letters(&self) -> &BTreeSet<u8> {
        &self.present_letters
    }

    /// Letters confirmed absent from the answer
    #[must_use]
    pub const fn excluded_letters(&self) -> &BTreeSet<u8> {
        &self.excluded_letters
    }

    /// Positions each letter is known not to occupy
    #[must_use]
    pub const fn position_exclusions(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.position_exclusions
    }

    /// Present letters whose position is not yet fixed
    pub fn misplaced_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.present_letters
            .iter()
            .copied()
            .filter(|&letter| !self.fixed_positions.contains(&Some(letter)))
    }
}
