//! Guess recommendation
//!
//! Runs the scoring engine over the whole surviving pool and reports the
//! average-optimal and minimax-optimal guesses.

mod progress;
mod recommender;

pub use progress::{NoProgress, ProgressHook};
pub use recommender::{
    Cancelled, DEFAULT_PROGRESS_INTERVAL, Recommendation, Recommender, RecommenderConfig,
    StrategyKind, Suggestion, suggest,
};
