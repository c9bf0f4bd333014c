//! Terminal progress bar for scoring passes

use crate::recommend::ProgressHook;
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::ControlFlow;

/// `ProgressHook` that drives an indicatif bar on stderr
pub struct ProgressBarHook {
    bar: ProgressBar,
}

impl ProgressBarHook {
    /// Bar for a pass over `total` candidates
    #[must_use]
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Analyzing [{bar:40.cyan/blue}] {pos}/{len} candidates")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        Self { bar }
    }

    /// Bar that never draws
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressHook for ProgressBarHook {
    fn on_progress(&mut self, scored: usize, total: usize) -> ControlFlow<()> {
        self.bar.set_length(total as u64);
        self.bar.set_position(scored as u64);
        ControlFlow::Continue(())
    }

    fn on_finish(&mut self, scored: usize, _total: usize) {
        self.bar.set_position(scored as u64);
        self.bar.finish_and_clear();
    }
}

/// Bar for benchmark targets
#[must_use]
pub fn benchmark_bar(targets: usize) -> ProgressBar {
    let bar = ProgressBar::new(targets as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    bar
}
