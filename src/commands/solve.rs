//! Word solving command
//!
//! Plays a game against a known target and records every step.

use crate::core::{Pattern, Word};
use crate::progress::ProgressSink;
use crate::solver::Session;
use crate::solver::entropy::calculate_metrics;
use anyhow::{Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` starting from the session's current state
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word of the session's length
/// - The target is not in the corpus
pub fn solve_word(
    session: &mut Session<'_>,
    config: &SolveConfig,
    progress: &mut impl ProgressSink,
) -> Result<SolveResult> {
    let target = Word::with_length(config.target.as_str(), session.word_length())?;
    if !session.corpus().contains(target.text()) {
        bail!("'{target}' is not in the word list");
    }

    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.candidate_count();
        let guess = session.best_guess_with_progress(progress)?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(guess, session.candidates());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = Pattern::calculate(guess, &target);
        let candidates_after = session.filter(guess, pattern)?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
