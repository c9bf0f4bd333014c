//! Benchmark command
//!
//! Autoplays a sample of targets with both strategies and compares the
//! guess distributions.

use super::solve::{DEFAULT_MAX_GUESSES, play_game};
use crate::core::Word;
use crate::recommend::{Recommender, StrategyKind};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    pub max_guesses: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: 42,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// Per-strategy outcome of a benchmark
#[derive(Debug, Clone)]
pub struct StrategyStats {
    pub strategy: StrategyKind,
    pub games: usize,
    pub solved: usize,
    /// Guesses over solved games only
    pub total_guesses: usize,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of games solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
}

impl StrategyStats {
    #[must_use]
    pub const fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            games: 0,
            solved: 0,
            total_guesses: 0,
            min_guesses: usize::MAX,
            max_guesses: 0,
            distribution: BTreeMap::new(),
        }
    }

    fn record(&mut self, guesses: usize, success: bool) {
        self.games += 1;
        if !success {
            return;
        }
        self.solved += 1;
        self.total_guesses += guesses;
        self.min_guesses = self.min_guesses.min(guesses);
        self.max_guesses = self.max_guesses.max(guesses);
        *self.distribution.entry(guesses).or_insert(0) += 1;
    }

    /// Mean guesses per solved game, zero when nothing was solved
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        self.total_guesses as f64 / self.solved as f64
    }

    #[must_use]
    pub const fn failed(&self) -> usize {
        self.games - self.solved
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub average: StrategyStats,
    pub minimax: StrategyStats,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Stats for one strategy
    #[must_use]
    pub const fn stats(&self, strategy: StrategyKind) -> &StrategyStats {
        match strategy {
            StrategyKind::Average => &self.average,
            StrategyKind::Minimax => &self.minimax,
        }
    }
}

/// Draw `count` distinct targets from `words`, reproducibly for a seed
///
/// Returns every word, in list order, when `count` covers the whole list.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: u64) -> Vec<Word> {
    if count >= words.len() {
        return words.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Solve every target with both strategies
///
/// `progress` advances once per target.
pub fn run_benchmark(
    words: &[Word],
    targets: &[Word],
    recommender: Recommender,
    max_guesses: usize,
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut average = StrategyStats::new(StrategyKind::Average);
    let mut minimax = StrategyStats::new(StrategyKind::Minimax);

    for target in targets {
        progress.set_message(target.to_string());

        for stats in [&mut average, &mut minimax] {
            let game = play_game(target, words, stats.strategy, max_guesses, recommender);
            stats.record(game.guesses.len(), game.success);
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    info!(
        targets = total_words,
        average = average.average_guesses(),
        minimax = minimax.average_guesses(),
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    BenchmarkResult {
        total_words,
        average,
        minimax,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
