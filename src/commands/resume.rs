//! Resume command
//!
//! Continues a game from a history file of `word pattern` lines.

use crate::core::GuessHistory;
use crate::solver::{RankingConfig, Session};
use crate::wordlists::Corpus;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read and validate a history file
///
/// # Errors
///
/// Returns an error if the file cannot be read or any line is invalid. Every
/// invalid line is listed.
pub fn load_history(path: &Path) -> Result<GuessHistory> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read history file {}", path.display()))?;
    GuessHistory::parse(&text)
        .with_context(|| format!("invalid history file {}", path.display()))
}

/// Build a session with every history entry applied
///
/// # Errors
///
/// Returns an error if an entry has the wrong length for the corpus or
/// contradicts the entries before it.
pub fn resume_session<'a>(
    corpus: &'a Corpus,
    config: RankingConfig,
    history: &GuessHistory,
) -> Result<Session<'a>> {
    let session = Session::resume(corpus, config, history)
        .context("history does not fit the word list")?;
    tracing::info!(
        entries = history.len(),
        candidates = session.candidate_count(),
        "resumed game"
    );
    Ok(session)
}
