//! Validated word corpus
//!
//! The full ordered list of words of one length that a session guesses from.
//! Immutable once built.

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
use crate::progress::{LOADING_STAGE, ProgressSink};
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Lines processed between progress reports while loading
pub const LOAD_BATCH_SIZE: usize = 1000;

/// Error type for corpus construction
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("word length {0} is outside 3 to 15")]
    UnsupportedLength(usize),
    #[error("no valid {0}-letter words found")]
    Empty(usize),
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered, duplicate-free list of words sharing one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    word_length: usize,
    words: Vec<Word>,
}

impl Corpus {
    /// Build a corpus from raw entries
    ///
    /// Entries are trimmed and lowercased. Anything that is not exactly
    /// `word_length` ASCII letters is dropped, as are repeats.
    ///
    /// # Errors
    /// Returns `CorpusError::UnsupportedLength` when `word_length` is outside
    /// 3..=15 and `CorpusError::Empty` when no entry survives.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_words(["Crane", "slate", "crane", "toolong", "sl8te"], 5).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.words()[0].text(), "crane");
    /// ```
    pub fn from_words<I, S>(entries: I, word_length: usize) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CorpusBuilder::new(word_length)?;
        builder.extend(entries);
        builder.finish()
    }

    /// Build a corpus from newline-separated text, reporting progress
    ///
    /// Lines are processed in batches of [`LOAD_BATCH_SIZE`] with a report
    /// after each batch. `\r\n` endings are accepted.
    ///
    /// # Errors
    /// Same as [`Corpus::from_words`].
    pub fn parse_with_progress(
        text: &str,
        word_length: usize,
        progress: &mut impl ProgressSink,
    ) -> Result<Self, CorpusError> {
        let mut builder = CorpusBuilder::new(word_length)?;
        let lines: Vec<&str> = text.lines().collect();
        let total = lines.len().max(1);

        let mut reported = 0;
        progress.report(reported, LOADING_STAGE);
        for (index, chunk) in lines.chunks(LOAD_BATCH_SIZE).enumerate() {
            builder.extend(chunk);
            let processed = ((index + 1) * LOAD_BATCH_SIZE).min(total);
            reported = (processed * 100 / total) as u8;
            progress.report(reported, LOADING_STAGE);
        }
        if reported < 100 {
            progress.report(100, LOADING_STAGE);
        }

        builder.finish()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A built corpus always holds at least one word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'c> IntoIterator for &'c Corpus {
    type Item = &'c Word;
    type IntoIter = std::slice::Iter<'c, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

struct CorpusBuilder {
    word_length: usize,
    seen: FxHashSet<String>,
    words: Vec<Word>,
    rejected: usize,
}

impl CorpusBuilder {
    fn new(word_length: usize) -> Result<Self, CorpusError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(CorpusError::UnsupportedLength(word_length));
        }
        Ok(Self {
            word_length,
            seen: FxHashSet::default(),
            words: Vec::new(),
            rejected: 0,
        })
    }

    fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            match Word::with_length(entry, self.word_length) {
                Ok(word) => {
                    if self.seen.insert(word.text().to_string()) {
                        self.words.push(word);
                    }
                }
                Err(_) => self.rejected += 1,
            }
        }
    }

    fn finish(self) -> Result<Corpus, CorpusError> {
        if self.words.is_empty() {
            return Err(CorpusError::Empty(self.word_length));
        }
        tracing::debug!(
            words = self.words.len(),
            rejected = self.rejected,
            length = self.word_length,
            "corpus built"
        );
        Ok(Corpus {
            word_length: self.word_length,
            words: self.words,
        })
    }
}
