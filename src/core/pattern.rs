//! Wordle feedback symbols and pattern calculation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Misplaced (letter in word, wrong position)
//! - 2 = Match (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackSymbol {
    Absent,
    Misplaced,
    Match,
}

impl FeedbackSymbol {
    /// Reference digit encoding (0/1/2)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Misplaced => 1,
            Self::Match => 2,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts digits `0`/`1`/`2`, letters `G`/`Y` with `-`/`_`/`X`/`B` for absent,
    /// and the coloured squares.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Match),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '0' | '-' | '_' | 'X' | 'x' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Match,
            1 => Self::Misplaced,
            _ => Self::Absent,
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{0}' (use 0/1/2 or G/Y/-)")]
    InvalidSymbol(char),
}

/// Feedback pattern for a Wordle guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All matches (solved)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all positions matched)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from one symbol per position
    #[must_use]
    pub fn from_symbols(symbols: [FeedbackSymbol; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            pattern += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decode into one symbol per position
    #[must_use]
    pub fn symbols(self) -> [FeedbackSymbol; WORD_LENGTH] {
        let mut symbols = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut val = self.0;
        for symbol in &mut symbols {
            *symbol = FeedbackSymbol::from_digit(val % 3);
            val /= 3;
        }
        symbols
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's feedback rules including repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer letters
    /// 2. Second pass: mark misplaced letters, consuming the first unconsumed
    ///    occurrence in the answer from left to right
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_string(), "00202");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*answer.chars()).map(Some);
        let mut result = [FeedbackSymbol::Absent; WORD_LENGTH];

        // Allow: index pairs guess[i], remaining[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if remaining[i] == Some(guess[i]) {
                result[i] = FeedbackSymbol::Match;
                remaining[i] = None;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if result[i] != FeedbackSymbol::Absent {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = FeedbackSymbol::Misplaced;
                *slot = None;
            }
        }

        Self::from_symbols(result)
    }

    /// Count the number of matched positions
    #[must_use]
    pub fn count_matches(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == FeedbackSymbol::Match)
            .count()
    }

    /// Count the number of misplaced positions
    #[must_use]
    pub fn count_misplaced(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == FeedbackSymbol::Misplaced)
            .count()
    }

    /// Parse a pattern from a string like "01202", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string does not hold exactly five
    /// recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Pattern;
    ///
    /// let p1 = Pattern::parse("21022").unwrap();
    /// let p2 = Pattern::parse("GY-GG").unwrap();
    /// let p3 = Pattern::parse("🟩🟨⬜🟩🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p2, p3);
    /// assert!(Pattern::parse("2102").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.trim().chars().collect();

        let symbols: [char; WORD_LENGTH] = chars
            .as_slice()
            .try_into()
            .map_err(|_| FeedbackError::InvalidLength(chars.len()))?;

        let mut parsed = [FeedbackSymbol::Absent; WORD_LENGTH];
        for (slot, ch) in parsed.iter_mut().zip(symbols) {
            *slot = FeedbackSymbol::from_char(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self::from_symbols(parsed))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Pattern;
    ///
    /// let p = Pattern::parse("21022").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols()
            .iter()
            .map(|symbol| match symbol {
                FeedbackSymbol::Match => '🟩',
                FeedbackSymbol::Misplaced => '🟨',
                FeedbackSymbol::Absent => '⬜',
            })
            .collect()
    }
}

/// Compute the feedback `guess` receives when `answer` is the target
#[inline]
#[must_use]
pub fn compute_feedback(guess: &Word, answer: &Word) -> Pattern {
    Pattern::calculate(guess, answer)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.digit())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
