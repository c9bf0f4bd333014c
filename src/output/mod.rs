//! Terminal output formatting
//!
//! Display utilities for the REPL and CLI results.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_analysis_result, print_benchmark_result, print_solve_result, write_recommendation,
    write_stats,
};
pub use progress::{ProgressBarHook, benchmark_bar};
