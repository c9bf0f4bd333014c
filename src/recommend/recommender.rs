//! Dual-strategy guess recommendation
//!
//! Scores every word of the surviving pool against that same pool and keeps
//! two winners in a single pass: the lowest expected remaining count and the
//! lowest worst case (tie-broken by expected count).

use super::progress::{NoProgress, ProgressHook};
use crate::core::Word;
use crate::scoring::{Score, score};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, info};

/// Default number of candidates scored between progress reports
pub const DEFAULT_PROGRESS_INTERVAL: usize = 20;

/// A scoring pass stopped early by its progress hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Scoring cancelled after {scored} of {total} candidates")]
pub struct Cancelled {
    pub scored: usize,
    pub total: usize,
}

/// A suggested word and its statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: Word,
    pub score: Score,
}

/// The best guess under each strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// Minimum expected remaining candidates
    pub average: Suggestion,
    /// Minimum worst-case remaining candidates
    pub minimax: Suggestion,
}

impl Recommendation {
    /// True when both strategies picked the same word
    #[must_use]
    pub fn strategies_agree(&self) -> bool {
        self.average.word == self.minimax.word
    }
}

/// Which of the two winners to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Minimize expected remaining candidates
    #[default]
    Average,
    /// Minimize worst-case remaining candidates
    Minimax,
}

impl StrategyKind {
    /// Create strategy from name string
    ///
    /// Supported names: "average", "expected", "minimax", "worst-case".
    /// Defaults to average if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "minimax" | "worst-case" | "worst" => Self::Minimax,
            _ => Self::Average,
        }
    }

    /// Pick this strategy's suggestion
    #[must_use]
    pub const fn pick(self, recommendation: &Recommendation) -> &Suggestion {
        match self {
            Self::Average => &recommendation.average,
            Self::Minimax => &recommendation.minimax,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Minimax => "minimax",
        }
    }
}

/// Tunables for the recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// Candidates scored between progress reports
    pub progress_interval: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Ranks candidate guesses under both strategies
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    #[must_use]
    pub const fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Suggest the best next guesses for `pool`
    ///
    /// Returns `None` if the pool is empty.
    #[must_use]
    pub fn suggest(&self, pool: &[Word]) -> Option<Recommendation> {
        self.suggest_with_progress(pool, &mut NoProgress)
            .ok()
            .flatten()
    }

    /// Suggest the best next guesses, reporting progress to `hook`
    ///
    /// # Errors
    /// Returns `Cancelled` if the hook breaks out of the pass.
    pub fn suggest_with_progress<H>(
        &self,
        pool: &[Word],
        hook: &mut H,
    ) -> Result<Option<Recommendation>, Cancelled>
    where
        H: ProgressHook + ?Sized,
    {
        let total = pool.len();
        let (first, rest) = match pool {
            [] => {
                hook.on_finish(0, 0);
                return Ok(None);
            }
            [only] => {
                hook.on_finish(1, 1);
                let suggestion = Suggestion {
                    word: only.clone(),
                    score: Score::ZERO,
                };
                return Ok(Some(Recommendation {
                    average: suggestion.clone(),
                    minimax: suggestion,
                }));
            }
            [first, rest @ ..] => (first, rest),
        };

        let interval = self.config.progress_interval.max(1);

        let first_score = score(first, pool);
        let mut best_average = (first, first_score);
        let mut best_minimax = (first, first_score);

        for (offset, word) in rest.iter().enumerate() {
            let scored = offset + 1;
            if scored % interval == 0 && hook.on_progress(scored, total).is_break() {
                hook.on_finish(scored, total);
                debug!(scored, total, "scoring pass cancelled");
                return Err(Cancelled { scored, total });
            }

            let candidate = score(word, pool);

            // Strict improvements only, so earlier words win ties
            if candidate.cmp_expected(&best_average.1) == Ordering::Less {
                best_average = (word, candidate);
            }
            if candidate.cmp_minimax(&best_minimax.1) == Ordering::Less {
                best_minimax = (word, candidate);
            }
        }

        hook.on_finish(total, total);

        let recommendation = Recommendation {
            average: Suggestion {
                word: best_average.0.clone(),
                score: best_average.1,
            },
            minimax: Suggestion {
                word: best_minimax.0.clone(),
                score: best_minimax.1,
            },
        };

        info!(
            candidates = total,
            average = %recommendation.average.word,
            expected = recommendation.average.score.expected(),
            minimax = %recommendation.minimax.word,
            worst_case = recommendation.minimax.score.worst_case(),
            "recommendation ready"
        );

        Ok(Some(recommendation))
    }
}

/// Suggest with the default configuration and no progress reporting
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::recommend::suggest;
///
/// let pool = vec![Word::new("crane").unwrap()];
/// let recommendation = suggest(&pool).unwrap();
/// assert_eq!(recommendation.average.word.text(), "CRANE");
/// assert!(recommendation.strategies_agree());
///
/// assert!(suggest(&[]).is_none());
/// ```
#[must_use]
pub fn suggest(pool: &[Word]) -> Option<Recommendation> {
    Recommender::default().suggest(pool)
}
