//! One game's worth of state
//!
//! A session owns the loaded word list, the constraints gathered so far and
//! the candidate pool those constraints leave. Every accepted update narrows
//! the pool; `undo` restores the pool from before the last turn and `reset`
//! restores the full list.

use crate::constraints::{self, ConstraintStore, UpdateError, parse_turn};
use crate::core::{Pattern, Word};
use crate::recommend::{Cancelled, ProgressHook, Recommendation, Recommender};
use tracing::{debug, info};

/// Interactive solving state
#[derive(Debug, Clone)]
pub struct Session {
    all_words: Vec<Word>,
    pool: Vec<Word>,
    store: ConstraintStore,
    history: Vec<(Word, Pattern)>,
    checkpoints: Vec<Checkpoint>,
    recommender: Recommender,
}

/// Store and pool as they were before a turn was recorded
#[derive(Debug, Clone)]
struct Checkpoint {
    store: ConstraintStore,
    pool: Vec<Word>,
}

impl Session {
    /// Start a session over `words` with the default recommender
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_recommender(words, Recommender::default())
    }

    /// Start a session over `words` using `recommender` for suggestions
    #[must_use]
    pub fn with_recommender(words: Vec<Word>, recommender: Recommender) -> Self {
        Self {
            pool: words.clone(),
            all_words: words,
            store: ConstraintStore::new(),
            history: Vec::new(),
            checkpoints: Vec::new(),
            recommender,
        }
    }

    /// Apply a textual guess and feedback, then narrow the pool
    ///
    /// # Errors
    /// Returns the validation error when either input is malformed. The
    /// constraints and pool are unchanged in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    /// use wordle_minimax::session::Session;
    ///
    /// let words: Vec<Word> = ["CRANE", "SLATE", "TRACE"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session = Session::new(words);
    ///
    /// session.update("CRANE", "12202").unwrap();
    /// assert_eq!(session.candidates().len(), 1);
    /// ```
    pub fn update(&mut self, guess: &str, feedback: &str) -> Result<(), UpdateError> {
        let (guess, pattern) = parse_turn(guess, feedback)?;
        self.record(guess, pattern);
        Ok(())
    }

    /// Record an already-validated turn
    pub fn record(&mut self, guess: Word, pattern: Pattern) {
        let before = self.pool.len();
        self.checkpoints.push(Checkpoint {
            store: self.store.clone(),
            pool: self.pool.clone(),
        });
        self.store.record(&guess, pattern);
        self.pool = constraints::apply(&self.store, &self.pool);
        debug!(
            guess = %guess,
            pattern = %pattern,
            before,
            after = self.pool.len(),
            "narrowed candidate pool"
        );
        self.history.push((guess, pattern));
    }

    /// Remaining candidates in word-list order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.pool
    }

    /// Every word the session was started with
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    /// Constraints gathered so far
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.store
    }

    /// Turns recorded since the last reset
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// True once a turn came back all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, pattern)| pattern.is_perfect())
    }

    /// Best guesses for the current pool under both strategies
    #[must_use]
    pub fn suggest(&self) -> Option<Recommendation> {
        self.recommender.suggest(&self.pool)
    }

    /// Like `suggest`, reporting progress to `hook`
    ///
    /// # Errors
    /// Returns `Cancelled` when the hook stops the pass.
    pub fn suggest_with_progress<H: ProgressHook + ?Sized>(
        &self,
        hook: &mut H,
    ) -> Result<Option<Recommendation>, Cancelled> {
        self.recommender.suggest_with_progress(&self.pool, hook)
    }

    /// Forget all constraints and restore the full pool
    pub fn reset(&mut self) {
        self.store.clear();
        self.history.clear();
        self.checkpoints.clear();
        self.pool.clone_from(&self.all_words);
        info!(words = self.pool.len(), "session reset");
    }

    /// Drop the most recent turn, restoring the store and pool it replaced
    pub fn undo(&mut self) -> Option<(Word, Pattern)> {
        let undone = self.history.pop()?;
        if let Some(checkpoint) = self.checkpoints.pop() {
            self.store = checkpoint.store;
            self.pool = checkpoint.pool;
        }

        debug!(guess = %undone.0, remaining = self.pool.len(), "undid turn");
        Some(undone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: [&str; 5] = ["CRANE", "SLATE", "TRACE", "GRAPE", "PLANE"];

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn all_green_leaves_the_guess() {
        let mut session = Session::new(words(&SCENARIO));
        session.update("CRANE", "22222").unwrap();

        assert_eq!(session.candidates(), words(&["CRANE"]).as_slice());
        assert!(session.is_solved());

        let rec = session.suggest().unwrap();
        assert_eq!(rec.average.word.text(), "CRANE");
        assert_eq!(rec.minimax.word.text(), "CRANE");
        assert_eq!(rec.average.score.worst_case(), 0);
    }

    #[test]
    fn rejected_update_keeps_pool_and_history() {
        let mut session = Session::new(words(&SCENARIO));
        session.update("SLATE", "00202").unwrap();
        let pool = session.candidates().to_vec();

        assert!(session.update("CRAN", "00000").is_err());
        assert!(session.update("CRANE", "0000").is_err());
        assert!(session.update("CRANE", "0a000").is_err());

        assert_eq!(session.candidates(), pool.as_slice());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn pool_only_shrinks() {
        let mut session = Session::new(words(&SCENARIO));
        let answer = Word::new("PLANE").unwrap();
        let mut previous = session.candidates().len();

        for guess in ["SLATE", "GRAPE", "PLANE"] {
            let guess = Word::new(guess).unwrap();
            let pattern = Pattern::calculate(&guess, &answer);
            session.record(guess, pattern);

            let remaining = session.candidates();
            assert!(remaining.len() <= previous);
            assert!(remaining.iter().all(|w| session.all_words().contains(w)));
            assert!(remaining.contains(&answer));
            previous = remaining.len();
        }
        assert!(session.is_solved());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = Session::new(words(&SCENARIO));
        session.update("CRANE", "12202").unwrap();
        assert_eq!(session.candidates().len(), 1);

        session.reset();
        let once = session.candidates().to_vec();
        session.reset();

        assert_eq!(session.candidates(), once.as_slice());
        assert_eq!(once, words(&SCENARIO));
        assert!(session.constraints().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn undo_steps_back_one_turn_at_a_time() {
        let mut session = Session::new(words(&SCENARIO));
        session.update("PLANE", "00222").unwrap();
        let after_first = session.candidates().to_vec();
        assert_eq!(after_first, words(&["CRANE"]));

        session.update("CRANE", "22222").unwrap();
        let (undone, _) = session.undo().unwrap();
        assert_eq!(undone.text(), "CRANE");
        assert_eq!(session.candidates(), after_first.as_slice());

        session.undo().unwrap();
        assert_eq!(session.candidates(), words(&SCENARIO).as_slice());
        assert!(session.undo().is_none());
    }

    #[test]
    fn undo_after_contradictory_feedback_restores_the_earlier_pool() {
        let mut session = Session::new(crate::wordlists::loader::embedded_words());
        session.update("ABBEY", "00000").unwrap();
        session.update("EXTRA", "10000").unwrap();
        let after_two = session.candidates().to_vec();
        let store_after_two = session.constraints().clone();
        assert!(after_two.is_empty());

        // E is present now, so this absent E only rules out one position
        session.update("OLIVE", "00000").unwrap();
        session.undo().unwrap();

        assert_eq!(session.candidates(), after_two.as_slice());
        assert_eq!(session.constraints(), &store_after_two);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn empty_pool_has_no_suggestion() {
        let mut session = Session::new(words(&SCENARIO));
        session.update("ZZZZZ", "22222").unwrap();

        assert!(session.candidates().is_empty());
        assert!(session.suggest().is_none());
    }
}
