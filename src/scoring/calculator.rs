//! Expected and worst-case remaining candidates for a guess
//!
//! Given a guess and set of possible answers, groups the answers by the
//! feedback pattern each would produce. Answers in the same group cannot be
//! told apart by this guess.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Remaining-candidate statistics for one guess
///
/// The expected count is kept as an exact fraction (sum of squared group
/// sizes over the number of answers) so rankings never depend on floating
/// point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    sum_of_squares: u64,
    total: u64,
    worst_case: usize,
}

impl Score {
    /// Score of a guess with nothing left to distinguish
    pub const ZERO: Self = Self {
        sum_of_squares: 0,
        total: 0,
        worst_case: 0,
    };

    /// Build a score from partition group sizes
    #[must_use]
    pub fn from_group_sizes(sizes: impl IntoIterator<Item = usize>) -> Self {
        sizes
            .into_iter()
            .fold(Self::ZERO, |score, size| {
                let size_u64 = size as u64;
                Self {
                    sum_of_squares: score.sum_of_squares + size_u64 * size_u64,
                    total: score.total + size_u64,
                    worst_case: score.worst_case.max(size),
                }
            })
    }

    /// Probability-weighted remaining candidate count: Σ size² / n
    #[must_use]
    pub fn expected(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.sum_of_squares as f64 / self.total as f64
    }

    /// Size of the largest group, the adversarial outcome
    #[must_use]
    pub const fn worst_case(&self) -> usize {
        self.worst_case
    }

    /// Number of answers that were partitioned
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Exact comparison of expected remaining counts
    #[must_use]
    pub fn cmp_expected(&self, other: &Self) -> Ordering {
        // a/b vs c/d  <=>  a*d vs c*b, with 0/0 treated as 0
        let lhs = u128::from(self.sum_of_squares) * u128::from(other.total.max(1));
        let rhs = u128::from(other.sum_of_squares) * u128::from(self.total.max(1));
        lhs.cmp(&rhs)
    }

    /// Minimax ordering: worst case first, expected count as the tiebreak
    #[must_use]
    pub fn cmp_minimax(&self, other: &Self) -> Ordering {
        self.worst_case
            .cmp(&other.worst_case)
            .then_with(|| self.cmp_expected(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {:.2}, worst case {}",
            self.expected(),
            self.worst_case
        )
    }
}

/// Group answers by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern(guess: &Word, answers: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for answer in answers {
        let pattern = Pattern::calculate(guess, answer);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Score a guess against the possible answers
///
/// Returns `Score::ZERO` when `answers` is empty.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::scoring::score;
///
/// let guess = Word::new("crane").unwrap();
/// let answers = vec![Word::new("crane").unwrap(), Word::new("crate").unwrap()];
///
/// let result = score(&guess, &answers);
/// assert!((result.expected() - 1.0).abs() < f64::EPSILON);
/// assert_eq!(result.worst_case(), 1);
/// ```
#[must_use]
pub fn score(guess: &Word, answers: &[Word]) -> Score {
    if answers.is_empty() {
        return Score::ZERO;
    }

    Score::from_group_sizes(group_by_pattern(guess, answers).into_values())
}

/// Largest partitions first, ties in pattern order
#[must_use]
pub fn largest_groups(guess: &Word, answers: &[Word], limit: usize) -> Vec<(Pattern, usize)> {
    let mut groups: Vec<(Pattern, usize)> = group_by_pattern(guess, answers).into_iter().collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    groups.truncate(limit);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn crane_splits_crane_and_crate() {
        let guess = Word::new("CRANE").unwrap();
        let result = score(&guess, &words(&["CRANE", "CRATE"]));

        assert!((result.expected() - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.worst_case(), 1);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn empty_answers_score_zero() {
        let guess = Word::new("CRANE").unwrap();
        let result = score(&guess, &[]);

        assert_eq!(result, Score::ZERO);
        assert!(result.expected().abs() < f64::EPSILON);
        assert_eq!(result.worst_case(), 0);
    }

    #[test]
    fn indistinguishable_answers_form_one_group() {
        // No letter of ZZZZZ appears in any answer
        let guess = Word::new("ZZZZZ").unwrap();
        let answers = words(&["AAAAA", "BBBBB", "CCCCC"]);
        let result = score(&guess, &answers);

        assert_eq!(result.worst_case(), 3);
        assert!((result.expected() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn skewed_partition_statistics() {
        // IRATE and GRATE share 02202; SLATE (00202) and CRATE stand alone
        let guess = Word::new("CRANE").unwrap();
        let answers = words(&["SLATE", "IRATE", "CRATE", "GRATE"]);

        let groups = group_by_pattern(&guess, &answers);
        assert_eq!(groups.values().sum::<usize>(), 4);
        assert_eq!(groups.len(), 3);

        let result = score(&guess, &answers);
        // (1 + 4 + 1) / 4
        assert!((result.expected() - 1.5).abs() < f64::EPSILON);
        assert_eq!(result.worst_case(), 2);
    }

    #[test]
    fn expected_comparison_is_exact() {
        // 1/3 vs 2/6 must compare equal even though neither is exact in f64
        let a = Score {
            sum_of_squares: 1,
            total: 3,
            worst_case: 1,
        };
        let b = Score {
            sum_of_squares: 2,
            total: 6,
            worst_case: 1,
        };
        assert_eq!(a.cmp_expected(&b), Ordering::Equal);
        assert_eq!(a.cmp_minimax(&b), Ordering::Equal);

        let sizes_a = Score::from_group_sizes([3, 1, 1, 1]);
        let sizes_b = Score::from_group_sizes([1, 3, 1, 1]);
        assert_eq!(sizes_a.cmp_expected(&sizes_b), Ordering::Equal);
    }

    #[test]
    fn minimax_ordering_uses_expected_as_tiebreak() {
        let even = Score::from_group_sizes([2, 2, 2]);
        let skewed = Score::from_group_sizes([2, 1, 1, 1, 1]);

        assert_eq!(even.worst_case(), skewed.worst_case());
        assert_eq!(skewed.cmp_minimax(&even), Ordering::Less);

        let lower_worst = Score::from_group_sizes([1; 6]);
        assert_eq!(lower_worst.cmp_minimax(&skewed), Ordering::Less);
    }

    #[test]
    fn largest_groups_sorted_descending() {
        let guess = Word::new("CRANE").unwrap();
        let answers = words(&["SLATE", "IRATE", "CRATE", "GRATE"]);

        let groups = largest_groups(&guess, &answers, 2);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].1, 2);
        assert_eq!(groups[1].1, 1);
    }
}
