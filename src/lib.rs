//! Wordle Advisor
//!
//! Ranks Wordle guesses by the Shannon entropy of the feedback they would
//! produce, and tracks the words still consistent with the feedback so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::{RankingConfig, Session};
//! use wordle_advisor::wordlists::Corpus;
//!
//! let corpus = Corpus::from_words(["crane", "slate", "trace", "place", "brace"], 5).unwrap();
//! let mut session = Session::new(&corpus, RankingConfig::default());
//!
//! let guess = Word::new("crane").unwrap();
//! session.filter(&guess, Pattern::parse("12202").unwrap()).unwrap();
//! assert_eq!(session.best_guess().unwrap().text(), "trace");
//! ```

// Core domain types
pub mod core;

// Progress reporting for long operations
pub mod progress;

// Ranking and candidate tracking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
