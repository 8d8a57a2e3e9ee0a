//! Word list loading utilities
//!
//! Loads a corpus from a flat word-list file or from the embedded sample.

use super::corpus::{Corpus, CorpusError};
use super::embedded::SAMPLE_WORDS;
use crate::progress::{NoProgress, ProgressSink};
use std::fs;
use std::path::Path;

/// Word length of the embedded sample list
pub const SAMPLE_WORD_LENGTH: usize = 5;

/// Load a corpus of `word_length`-letter words from a file
///
/// The file holds one word per line. Invalid entries are skipped.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or any error from
/// [`Corpus::from_words`].
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("words.txt", 5).unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Corpus, CorpusError> {
    load_from_file_with_progress(path, word_length, &mut NoProgress)
}

/// Load a corpus from a file, reporting progress while processing lines
///
/// # Errors
///
/// Same as [`load_from_file`].
pub fn load_from_file_with_progress<P: AsRef<Path>>(
    path: P,
    word_length: usize,
    progress: &mut impl ProgressSink,
) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = Corpus::parse_with_progress(&content, word_length, progress)?;
    tracing::info!(path = %path.display(), words = corpus.len(), "loaded word list");
    Ok(corpus)
}

/// The embedded five-letter sample corpus
///
/// # Errors
///
/// Returns `CorpusError::Empty` only if the embedded list contains no valid
/// words, which the build data rules out.
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::sample_corpus;
///
/// let corpus = sample_corpus().unwrap();
/// assert_eq!(corpus.word_length(), 5);
/// assert!(corpus.contains("crane"));
/// ```
pub fn sample_corpus() -> Result<Corpus, CorpusError> {
    Corpus::from_words(SAMPLE_WORDS, SAMPLE_WORD_LENGTH)
}
