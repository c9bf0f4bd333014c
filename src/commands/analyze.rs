//! Word analysis command
//!
//! Shows how a single guess would partition the word list.

use crate::core::{Pattern, Word, WordError};
use crate::scoring::{Score, largest_groups, score};
use thiserror::Error;

/// Partitions listed in the analysis
pub const DEFAULT_GROUP_LIMIT: usize = 5;

/// Reasons a word cannot be analyzed
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Word '{0}' not in word list")]
    UnknownWord(Word),
}

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub score: Score,
    pub largest_groups: Vec<(Pattern, usize)>,
    pub total_candidates: usize,
}

/// Score `word` against `candidates`
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in `all_words`
pub fn analyze_word(
    word: &str,
    all_words: &[Word],
    candidates: &[Word],
) -> Result<AnalysisResult, AnalyzeError> {
    let word = Word::new(word)?;
    if !all_words.contains(&word) {
        return Err(AnalyzeError::UnknownWord(word));
    }

    Ok(AnalysisResult {
        score: score(&word, candidates),
        largest_groups: largest_groups(&word, candidates, DEFAULT_GROUP_LIMIT),
        total_candidates: candidates.len(),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn scenario() -> Vec<Word> {
        words_from_slice(&["CRANE", "SLATE", "TRACE", "GRAPE", "PLANE"])
    }

    #[test]
    fn analyze_valid_word() {
        let words = scenario();
        let result = analyze_word("slate", &words, &words).unwrap();

        assert_eq!(result.word.text(), "SLATE");
        assert_eq!(result.total_candidates, 5);
        // Groups of 2, 1, 1, 1: (4 + 1 + 1 + 1) / 5
        assert!((result.score.expected() - 1.4).abs() < 1e-9);
        assert_eq!(result.score.worst_case(), 2);
        assert_eq!(result.largest_groups.len(), 4);
        assert_eq!(result.largest_groups[0], (Pattern::parse("00202").unwrap(), 2));
    }

    #[test]
    fn analyze_invalid_word() {
        let words = scenario();
        assert!(matches!(
            analyze_word("sl8te", &words, &words),
            Err(AnalyzeError::InvalidWord(_))
        ));
        assert!(matches!(
            analyze_word("abcdefg", &words, &words),
            Err(AnalyzeError::InvalidWord(WordError::InvalidLength(7)))
        ));
    }

    #[test]
    fn analyze_word_not_in_list() {
        let words = scenario();
        assert!(matches!(
            analyze_word("zzzzz", &words, &words),
            Err(AnalyzeError::UnknownWord(_))
        ));
    }

    #[test]
    fn group_listing_is_capped() {
        let words = crate::wordlists::loader::embedded_words();
        let result = analyze_word("slate", &words, &words).unwrap();

        assert_eq!(result.largest_groups.len(), DEFAULT_GROUP_LIMIT);
        let sizes: Vec<usize> = result.largest_groups.iter().map(|g| g.1).collect();
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sizes[0], result.score.worst_case());
    }
}
