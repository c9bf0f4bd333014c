//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, AnalyzeError, analyze_word};
pub use benchmark::{
    BenchmarkConfig, BenchmarkResult, StrategyStats, run_benchmark, sample_targets,
};
pub use simple::{Repl, run_simple};
pub use solve::{SolveConfig, SolveError, SolveResult, play_game, solve_word};
