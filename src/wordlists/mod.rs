//! Word lists for Wordle solving
//!
//! The corpus a session guesses from, loaded from a file or taken from the
//! sample list compiled into the binary.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, CorpusError, LOAD_BATCH_SIZE};
pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
