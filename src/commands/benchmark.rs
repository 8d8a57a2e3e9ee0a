//! Benchmark command
//!
//! Plays many games against random corpus words and summarizes the results.

use crate::core::{Pattern, Word};
use crate::solver::{RankingConfig, Session};
use crate::wordlists::Corpus;
use anyhow::Result;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub opening: String,
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the corpus
///
/// A seed makes the choice reproducible.
#[must_use]
pub fn sample_targets(corpus: &Corpus, count: usize, seed: Option<u64>) -> Vec<&Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    corpus
        .words()
        .choose_multiple(&mut rng, count)
        .collect()
}

/// Play one game per target, giving up after `max_guesses`
///
/// The opening guess is ranked once and reused for every game.
///
/// # Errors
///
/// Returns an error if a session cannot produce a guess, which only happens
/// when a target is not in the corpus.
pub fn run_benchmark(
    corpus: &Corpus,
    config: &RankingConfig,
    targets: &[&Word],
    max_guesses: usize,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let opening = Session::new(corpus, config.clone()).best_guess()?;

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution = BTreeMap::new();

    for &target in targets {
        let mut session = Session::new(corpus, config.clone());
        let mut guesses = 0;
        let mut guess = opening;

        loop {
            guesses += 1;
            let pattern = Pattern::calculate(guess, target);
            session.filter(guess, pattern)?;

            if pattern.is_perfect() {
                solved += 1;
                break;
            }
            if guesses >= max_guesses {
                break;
            }
            guess = session.best_guess()?;
        }

        tracing::debug!(%target, guesses, "benchmark game finished");
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses_seen = max_guesses_seen.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        opening: opening.text().to_string(),
        total_words,
        solved,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::sample_corpus;

    #[test]
    fn seeded_sampling_is_reproducible() {
        let corpus = sample_corpus().unwrap();
        let first = sample_targets(&corpus, 10, Some(7));
        let second = sample_targets(&corpus, 10, Some(7));

        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }

    #[test]
    fn sampling_caps_at_corpus_size() {
        let corpus = Corpus::from_words(["crane", "slate", "trace"], 5).unwrap();
        assert_eq!(sample_targets(&corpus, 10, None).len(), 3);
    }

    #[test]
    fn benchmark_runs() {
        let corpus = sample_corpus().unwrap();
        let targets = sample_targets(&corpus, 5, Some(1));

        let result = run_benchmark(&corpus, &RankingConfig::default(), &targets, 6).unwrap();

        assert_eq!(result.total_words, 5);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
        assert!(result.solved <= 5);
        assert!(corpus.contains(&result.opening));
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let corpus = sample_corpus().unwrap();
        let targets = sample_targets(&corpus, 5, Some(2));

        let result = run_benchmark(&corpus, &RankingConfig::default(), &targets, 6).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_empty_target_list() {
        let corpus = sample_corpus().unwrap();
        let result = run_benchmark(&corpus, &RankingConfig::default(), &[], 6).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
