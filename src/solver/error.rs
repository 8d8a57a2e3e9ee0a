//! Session error taxonomy

use crate::core::{Pattern, PatternError, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Which piece of caller input was malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Guess,
    Pattern,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess => write!(f, "guess"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

/// Errors reported by a solver session
///
/// None of these leave the session in a changed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The feedback contradicts earlier feedback: no candidate would survive
    #[error("feedback {pattern} for '{guess}' contradicts earlier feedback")]
    InconsistentFeedback { guess: Word, pattern: Pattern },

    /// No candidate remains to suggest
    #[error("no candidate words remain")]
    EmptyCandidateSet,

    #[error("{input} has {found} letters, expected {expected}")]
    LengthMismatch {
        input: InputKind,
        expected: usize,
        found: usize,
    },

    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    /// One candidate or fewer: there is nothing to cycle through
    #[error("no alternative suggestion exists")]
    NoAlternative,
}
