//! Core domain types for Wordle
//!
//! Words, feedback patterns and guess histories. Everything here is pure
//! and I/O-free.

mod history;
mod pattern;
mod word;

pub use history::{Guess, GuessHistory, HistoryError, LineError, LineErrorKind};
pub use pattern::{Pattern, PatternError};
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
