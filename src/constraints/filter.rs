//! Candidate filtering against accumulated constraints

use super::store::ConstraintStore;
use crate::core::Word;

/// Check whether `word` satisfies every constraint in `store`
#[must_use]
pub fn is_valid(store: &ConstraintStore, word: &Word) -> bool {
    if store
        .excluded_letters()
        .iter()
        .any(|&letter| word.has_letter(letter))
    {
        return false;
    }

    if store
        .fixed_positions()
        .any(|(position, letter)| word.char_at(position) != letter)
    {
        return false;
    }

    if !store
        .present_letters()
        .iter()
        .all(|&letter| word.has_letter(letter))
    {
        return false;
    }

    store
        .position_exclusions()
        .iter()
        .all(|(&letter, positions)| positions.iter().all(|&p| word.char_at(p) != letter))
}

/// Return the words of `pool` that satisfy `store`, in their original order
///
/// # Examples
/// ```
/// use wordle_minimax::constraints::{ConstraintStore, apply};
/// use wordle_minimax::core::Word;
///
/// let pool: Vec<Word> = ["CRANE", "SLATE", "TRACE"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut store = ConstraintStore::new();
/// store.update("CRANE", "12202").unwrap();
///
/// let remaining = apply(&store, &pool);
/// assert_eq!(remaining, vec![Word::new("TRACE").unwrap()]);
/// ```
#[must_use]
pub fn apply(store: &ConstraintStore, pool: &[Word]) -> Vec<Word> {
    pool.iter()
        .filter(|word| is_valid(store, word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    const SCENARIO: [&str; 5] = ["CRANE", "SLATE", "TRACE", "GRAPE", "PLANE"];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn empty_store_keeps_everything() {
        let pool = words(&SCENARIO);
        assert_eq!(apply(&ConstraintStore::new(), &pool), pool);
    }

    #[test]
    fn all_match_leaves_only_the_guess() {
        let pool = words(&SCENARIO);
        let mut store = ConstraintStore::new();
        store.update("CRANE", "22222").unwrap();

        assert_eq!(apply(&store, &pool), words(&["CRANE"]));
    }

    #[test]
    fn each_rule_rejects_independently() {
        let pool = words(&["CRANE", "SLATE", "TRACE", "GRAPE"]);

        // Excluded letter
        let mut store = ConstraintStore::new();
        store.update("NNNNN", "00000").unwrap();
        assert_eq!(apply(&store, &pool), words(&["SLATE", "TRACE", "GRAPE"]));

        // Fixed position
        let mut store = ConstraintStore::new();
        store.update("GXXXX", "20000").unwrap();
        assert_eq!(apply(&store, &pool), words(&["GRAPE"]));

        // Present letter with position exclusion
        let mut store = ConstraintStore::new();
        store.update("XXXXT", "00001").unwrap();
        assert_eq!(apply(&store, &pool), words(&["SLATE", "TRACE"]));

        let mut store = ConstraintStore::new();
        store.update("TXXXX", "10000").unwrap();
        assert_eq!(apply(&store, &pool), words(&["SLATE"]));
    }

    #[test]
    fn filtering_preserves_order() {
        let pool = words(&["TRACE", "GRAPE", "CRANE", "PLANE"]);
        let mut store = ConstraintStore::new();
        store.update("XXXXE", "00002").unwrap();
        assert_eq!(apply(&store, &pool), pool);

        store.update("XRXXX", "02000").unwrap();
        assert_eq!(apply(&store, &pool), words(&["TRACE", "GRAPE", "CRANE"]));
    }

    #[test]
    fn apply_is_idempotent() {
        let answers = words(&["ERASE", "ABIDE", "SPOIL", "FLOOR", "EERIE", "GRAPE"]);
        let guesses = words(&["TRAIL", "SPEED", "SKILL", "ROBOT", "EERIE", "LLAMA"]);
        let mut pool = words(&SCENARIO);
        pool.extend(answers.iter().cloned());
        pool.extend(guesses.iter().cloned());

        for answer in &answers {
            let mut store = ConstraintStore::new();
            for guess in &guesses {
                store.record(guess, Pattern::calculate(guess, answer));

                let once = apply(&store, &pool);
                let twice = apply(&store, &once);
                assert_eq!(once, twice, "{guess} vs {answer}");
                assert!(once.len() <= pool.len());
            }
        }

        let mut store = ConstraintStore::new();
        store.update("TRAIL", "01100").unwrap();
        let once = apply(&store, &pool);
        assert_eq!(apply(&store, &once), once);
    }

    #[test]
    fn more_constraints_never_grow_the_pool() {
        let pool = words(&SCENARIO);
        let answer = Word::new("GRAPE").unwrap();
        let mut store = ConstraintStore::new();
        let mut previous = apply(&store, &pool).len();

        for guess in ["PLANE", "TRACE", "GRAPE"] {
            let guess = Word::new(guess).unwrap();
            store.record(&guess, Pattern::calculate(&guess, &answer));
            let filtered = apply(&store, &pool);
            assert!(filtered.len() <= previous);
            assert!(filtered.len() <= pool.len());
            assert!(filtered.contains(&answer));
            previous = filtered.len();
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn store_never_rejects_the_answer_that_produced_its_feedback() {
        let answers = words(&["ERASE", "ABIDE", "SPOIL", "FLOOR", "EERIE"]);
        let guesses = words(&["SPEED", "SKILL", "ROBOT", "EERIE", "LLAMA"]);

        for answer in &answers {
            let mut store = ConstraintStore::new();
            for guess in &guesses {
                store.record(guess, Pattern::calculate(guess, answer));
                assert!(is_valid(&store, answer), "{guess} vs {answer}");
            }
        }
    }
}
