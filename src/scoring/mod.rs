//! Guess scoring
//!
//! Partitions the possible answers by feedback pattern and summarizes the
//! partition as expected and worst-case remaining candidates.

mod calculator;

pub use calculator::{Score, group_by_pattern, largest_groups, score};
