//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most a guess could reveal
///
/// A guess splits candidates into at most `3^length` patterns and at most
/// `candidates` groups, so neither can give more than log2 of that.
#[must_use]
pub fn entropy_bar(entropy: f64, word_length: usize, candidates: usize, width: usize) -> String {
    let max_entropy = (word_length as f64 * 3f64.log2()).min((candidates.max(1) as f64).log2());
    create_progress_bar(entropy, max_entropy, width)
}
