//! Entropy scoring of guesses
//!
//! Implements Shannon entropy calculation for feedback pattern distributions.
//! This is the foundation of information-theoretic ranking.

mod calculator;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
