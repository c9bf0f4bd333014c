//! Wordle Minimax
//!
//! A Wordle assistant that accumulates feedback constraints, filters the
//! word list and ranks the survivors by expected and worst-case remaining
//! candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::Word;
//! use wordle_minimax::session::Session;
//!
//! let words: Vec<Word> = ["crane", "slate", "trace", "grape", "plane"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut session = Session::new(words);
//! session.update("slate", "00202").unwrap();
//!
//! let recommendation = session.suggest().unwrap();
//! println!("Try {}", recommendation.minimax.word);
//! ```

// Core domain types
pub mod core;

// Constraint store and candidate filter
pub mod constraints;

// Partition scoring
pub mod scoring;

// Guess recommendation
pub mod recommend;

// Per-game state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
