//! Word solving command
//!
//! Autoplays a known target and records the path taken.

use crate::core::{Pattern, Word, WordError};
use crate::recommend::{Recommender, StrategyKind};
use crate::scoring::Score;
use crate::session::Session;
use thiserror::Error;
use tracing::debug;

/// Guesses allowed in a standard game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub strategy: StrategyKind,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, strategy: StrategyKind) -> Self {
        Self {
            target,
            strategy,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Reasons a word cannot be solved
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("Word '{0}' not in word list")]
    UnknownTarget(Word),
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
    pub strategy: StrategyKind,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub score: Score,
}

/// Solve a specific word by always playing `config.strategy`'s suggestion
///
/// # Errors
///
/// Returns an error if the target is not a valid word or is missing from
/// `words`.
pub fn solve_word(
    config: &SolveConfig,
    words: &[Word],
    recommender: Recommender,
) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;
    if !words.contains(&target) {
        return Err(SolveError::UnknownTarget(target));
    }

    Ok(play_game(
        &target,
        words,
        config.strategy,
        config.max_guesses,
        recommender,
    ))
}

/// Play one game against `target`, always taking `strategy`'s suggestion
///
/// The game ends when the target is hit, the pool runs dry or
/// `max_guesses` turns have been played.
#[must_use]
pub fn play_game(
    target: &Word,
    words: &[Word],
    strategy: StrategyKind,
    max_guesses: usize,
    recommender: Recommender,
) -> SolveResult {
    let mut session = Session::with_recommender(words.to_vec(), recommender);
    let mut guesses = Vec::new();

    for _ in 0..max_guesses {
        let candidates_before = session.candidates().len();
        let Some(recommendation) = session.suggest() else {
            break;
        };
        let suggestion = strategy.pick(&recommendation).clone();

        let pattern = Pattern::calculate(&suggestion.word, target);
        session.record(suggestion.word.clone(), pattern);

        debug!(
            guess = %suggestion.word,
            pattern = %pattern,
            remaining = session.candidates().len(),
            "solve turn"
        );

        guesses.push(GuessStep {
            word: suggestion.word,
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            score: suggestion.score,
        });

        if pattern.is_perfect() {
            break;
        }
    }

    SolveResult {
        success: session.is_solved(),
        guesses,
        target: target.clone(),
        strategy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const FAMILY: [&str; 9] = [
        "SOUTH", "STAFF", "STICK", "STILL", "STOCK", "STORM", "STORY", "STUDY", "STUFF",
    ];

    fn played(result: &SolveResult) -> Vec<&str> {
        result.guesses.iter().map(|step| step.word.text()).collect()
    }

    #[test]
    fn solve_word_succeeds() {
        let words = words_from_slice(&["CRANE", "SLATE", "TRACE", "GRAPE", "PLANE"]);
        let config = SolveConfig::new("grape".to_string(), StrategyKind::Average);

        let result = solve_word(&config, &words, Recommender::default()).unwrap();

        assert!(result.success);
        assert_eq!(played(&result), ["CRANE", "GRAPE"]);
        assert_eq!(result.guesses[0].pattern.to_string(), "02202");
    }

    #[test]
    fn strategies_take_different_paths() {
        let words = words_from_slice(&FAMILY);

        let average = solve_word(
            &SolveConfig::new("still".to_string(), StrategyKind::Average),
            &words,
            Recommender::default(),
        )
        .unwrap();
        assert_eq!(played(&average), ["STORY", "STAFF", "STICK", "STILL"]);

        let minimax = solve_word(
            &SolveConfig::new("still".to_string(), StrategyKind::Minimax),
            &words,
            Recommender::default(),
        )
        .unwrap();
        assert_eq!(played(&minimax), ["SOUTH", "STICK", "STILL"]);
        assert_eq!(minimax.guesses[0].score.worst_case(), 3);
    }

    #[test]
    fn solve_records_shrinking_pools() {
        let words = words_from_slice(&FAMILY);
        let config = SolveConfig::new("stuff".to_string(), StrategyKind::Average);

        let result = solve_word(&config, &words, Recommender::default()).unwrap();

        assert_eq!(result.guesses[0].candidates_before, 9);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let words = words_from_slice(&FAMILY);
        let mut config = SolveConfig::new("stuff".to_string(), StrategyKind::Average);
        config.max_guesses = 1;

        let result = solve_word(&config, &words, Recommender::default()).unwrap();

        assert!(!result.success);
        assert_eq!(played(&result), ["STORY"]);
        assert_eq!(result.guesses[0].candidates_after, 4);
    }

    #[test]
    fn solve_rejects_bad_targets() {
        let words = words_from_slice(&FAMILY);

        let unknown = SolveConfig::new("zzzzz".to_string(), StrategyKind::Average);
        assert!(matches!(
            solve_word(&unknown, &words, Recommender::default()),
            Err(SolveError::UnknownTarget(_))
        ));

        let invalid = SolveConfig::new("st1ck".to_string(), StrategyKind::Average);
        assert!(matches!(
            solve_word(&invalid, &words, Recommender::default()),
            Err(SolveError::InvalidTarget(_))
        ));
    }
}
