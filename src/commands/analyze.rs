//! Word analysis command
//!
//! Measures how much a single guess would reveal against a set of candidates.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use crate::wordlists::Corpus;
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Analyze a guess against every word in the corpus
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a valid word of the corpus length
/// - The word is not in the corpus
pub fn analyze_word(word: &str, corpus: &Corpus) -> Result<AnalysisResult> {
    let guess = Word::with_length(word.trim(), corpus.word_length())?;
    if !corpus.contains(guess.text()) {
        bail!("'{guess}' is not in the word list");
    }

    let candidates: Vec<&Word> = corpus.iter().collect();
    let metrics = calculate_metrics(&guess, &candidates);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}
