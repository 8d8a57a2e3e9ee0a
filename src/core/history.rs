//! Guess history
//!
//! The ordered record of submitted guesses and the feedback each received.
//! The caller owns it; the solver session only reads it when replaying.

use super::pattern::Pattern;
use super::word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// One submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub pattern: Pattern,
}

/// Guesses in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    entries: Vec<Guess>,
}

/// A problem found on one line of a history file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    /// 1-based line number
    pub line: usize,
    pub kind: LineErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineErrorKind {
    #[error("expected `word pattern`")]
    Format,
    #[error("word length {0} is outside 3 to 15")]
    UnsupportedLength(usize),
    #[error("word has {found} letters but the first line has {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("word contains non-letter characters")]
    InvalidWord,
    #[error("pattern must be {0} digits, each 0, 1 or 2")]
    InvalidPattern(usize),
    #[error("`{0}` repeated with different feedback")]
    ConflictingRepeat(String),
}

/// Error type for history import
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history is empty")]
    Empty,
    #[error("{}", join_line_errors(.0))]
    Invalid(Vec<LineError>),
}

fn join_line_errors(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl GuessHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a guess and its feedback
    pub fn push(&mut self, word: Word, pattern: Pattern) {
        self.entries.push(Guess { word, pattern });
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<Guess> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Guess] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Guess> {
        self.entries.iter()
    }

    /// Length of the guessed words, taken from the first entry
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.entries.first().map(|guess| guess.word.length())
    }

    /// Parse a history written as one `word pattern` pair per line
    ///
    /// The word length is taken from the first line. Patterns use the digits
    /// 0, 1 and 2. A word repeated with identical feedback is kept once;
    /// repeated with different feedback it is an error. Every problem is
    /// collected so they can be reported together.
    ///
    /// # Errors
    /// Returns `HistoryError::Empty` for blank input and
    /// `HistoryError::Invalid` listing every bad line otherwise.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::GuessHistory;
    ///
    /// let history = GuessHistory::parse("crane 00202\nslate 22222\n").unwrap();
    /// assert_eq!(history.len(), 2);
    /// assert!(GuessHistory::parse("crane 0020").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, HistoryError> {
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();

        let Some(&(first_line, first)) = lines.first() else {
            return Err(HistoryError::Empty);
        };

        let word_length = first.split_whitespace().next().map_or(0, str::len);
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(HistoryError::Invalid(vec![LineError {
                line: first_line,
                kind: LineErrorKind::UnsupportedLength(word_length),
            }]));
        }

        let mut errors = Vec::new();
        let mut seen: FxHashMap<String, Pattern> = FxHashMap::default();
        let mut history = Self::new();

        for (line, content) in lines {
            match parse_line(content, word_length) {
                Ok((word, pattern)) => match seen.get(word.text()) {
                    Some(&previous) if previous == pattern => {}
                    Some(_) => errors.push(LineError {
                        line,
                        kind: LineErrorKind::ConflictingRepeat(word.text().to_string()),
                    }),
                    None => {
                        seen.insert(word.text().to_string(), pattern);
                        history.push(word, pattern);
                    }
                },
                Err(kind) => errors.push(LineError { line, kind }),
            }
        }

        if errors.is_empty() {
            Ok(history)
        } else {
            Err(HistoryError::Invalid(errors))
        }
    }
}

fn parse_line(content: &str, word_length: usize) -> Result<(Word, Pattern), LineErrorKind> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let &[word, pattern] = fields.as_slice() else {
        return Err(LineErrorKind::Format);
    };

    let word = Word::with_length(word, word_length).map_err(|e| match e {
        WordError::LengthMismatch { expected, found } => {
            LineErrorKind::LengthMismatch { expected, found }
        }
        WordError::InvalidLength(found) => LineErrorKind::LengthMismatch {
            expected: word_length,
            found,
        },
        WordError::NonAscii | WordError::InvalidCharacters => LineErrorKind::InvalidWord,
    })?;

    let pattern = Pattern::from_digits(pattern)
        .ok()
        .filter(|p| p.length() == word_length)
        .ok_or(LineErrorKind::InvalidPattern(word_length))?;

    Ok((word, pattern))
}

impl<'h> IntoIterator for &'h GuessHistory {
    type Item = &'h Guess;
    type IntoIter = std::slice::Iter<'h, Guess>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Writes the same `word pattern` lines that [`GuessHistory::parse`] reads
impl fmt::Display for GuessHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for guess in &self.entries {
            writeln!(f, "{} {}", guess.word, guess.pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_keep_order() {
        let mut history = GuessHistory::new();
        history.push(Word::new("crane").unwrap(), Pattern::parse("00202").unwrap());
        history.push(Word::new("slate").unwrap(), Pattern::perfect(5));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].word.text(), "crane");
        assert_eq!(history.pop().unwrap().word.text(), "slate");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn parse_valid_history() {
        let history = GuessHistory::parse("  CRANE 00202\n\nslate 22222\n").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].word.text(), "crane");
        assert_eq!(history.entries()[0].pattern.to_string(), "00202");
        assert!(history.entries()[1].pattern.is_perfect());
    }

    #[test]
    fn parse_other_word_length() {
        let history = GuessHistory::parse("cat 010\ndog 000").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].word.length(), 3);
        assert_eq!(history.word_length(), Some(3));
        assert_eq!(GuessHistory::new().word_length(), None);
    }

    #[test]
    fn parse_empty_history() {
        assert_eq!(GuessHistory::parse(""), Err(HistoryError::Empty));
        assert_eq!(GuessHistory::parse("\n  \n"), Err(HistoryError::Empty));
    }

    #[test]
    fn parse_unsupported_first_length() {
        let err = GuessHistory::parse("ab 01").unwrap_err();
        assert_eq!(
            err,
            HistoryError::Invalid(vec![LineError {
                line: 1,
                kind: LineErrorKind::UnsupportedLength(2)
            }])
        );
    }

    #[test]
    fn parse_collects_every_error() {
        let text = "crane 00202\nslates 000000\ncr4ne 00000\nslate 0030\nbrace\n";
        let HistoryError::Invalid(errors) = GuessHistory::parse(text).unwrap_err() else {
            panic!("expected line errors");
        };

        let kinds: Vec<_> = errors.iter().map(|e| (e.line, e.kind.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (
                    2,
                    LineErrorKind::LengthMismatch {
                        expected: 5,
                        found: 6
                    }
                ),
                (3, LineErrorKind::InvalidWord),
                (4, LineErrorKind::InvalidPattern(5)),
                (5, LineErrorKind::Format),
            ]
        );
    }

    #[test]
    fn parse_repeated_words() {
        // Same feedback twice is kept once
        let history = GuessHistory::parse("crane 00202\ncrane 00202").unwrap();
        assert_eq!(history.len(), 1);

        // Different feedback for the same word is rejected
        let err = GuessHistory::parse("crane 00202\ncrane 00200").unwrap_err();
        assert_eq!(
            err,
            HistoryError::Invalid(vec![LineError {
                line: 2,
                kind: LineErrorKind::ConflictingRepeat("crane".to_string())
            }])
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let history = GuessHistory::parse("crane 10202\nbrace 22222").unwrap();
        let reparsed = GuessHistory::parse(&history.to_string()).unwrap();
        assert_eq!(history, reparsed);
    }

    #[test]
    fn error_messages_name_lines() {
        let err = GuessHistory::parse("crane 00202\nbrace").unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected `word pattern`");
    }
}
