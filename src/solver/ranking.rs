//! Guess ranking
//!
//! Scores candidate guesses by entropy against the remaining candidates,
//! weighted toward guesses that could themselves be the answer. Scoring runs
//! in fixed-size batches so a caller can yield between them.

use super::entropy::calculate_entropy;
use crate::core::Word;
use crate::progress::Progress;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// How a previously computed ranking is treated when asked to rank again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Reuse the cached order while any cached word is still a candidate
    #[default]
    ReuseOnOverlap,
    /// Always score from scratch
    AlwaysRecompute,
}

/// Tuning constants for ranking
///
/// The weighting constants are heuristics, not derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Largest candidate set scored against the full corpus (default: 2000)
    ///
    /// Above this, half the ceiling is taken from the candidates and half
    /// from the corpus.
    pub pool_ceiling: usize,

    /// Candidate sets this small are scored against themselves only (default: 10)
    pub exhaustive_threshold: usize,

    /// Guesses scored per batch (default: 50)
    pub batch_size: usize,

    /// Base weight for guesses that are still candidates (default: 1.2)
    pub candidate_weight_base: f64,

    /// Extra weight spread by candidate position, earliest gets all of it (default: 0.1)
    pub candidate_weight_span: f64,

    /// Weight for guesses that can no longer be the answer (default: 1.0)
    pub probe_weight: f64,

    /// Size of the alternate-suggestion list (default: 8)
    pub suggestion_count: usize,

    pub cache_policy: CachePolicy,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            pool_ceiling: 2000,
            exhaustive_threshold: 10,
            batch_size: 50,
            candidate_weight_base: 1.2,
            candidate_weight_span: 0.1,
            probe_weight: 1.0,
            suggestion_count: 8,
            cache_policy: CachePolicy::ReuseOnOverlap,
        }
    }
}

impl RankingConfig {
    /// Weight applied to a guess's entropy
    ///
    /// `position` is the guess's index in the candidate set of size
    /// `candidate_count`, or `None` when it is not a candidate.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::solver::RankingConfig;
    ///
    /// let config = RankingConfig::default();
    /// assert!((config.frequency_weight(Some(0), 10) - 1.3).abs() < 1e-9);
    /// assert!((config.frequency_weight(Some(5), 10) - 1.25).abs() < 1e-9);
    /// assert!((config.frequency_weight(None, 10) - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn frequency_weight(&self, position: Option<usize>, candidate_count: usize) -> f64 {
        match position {
            Some(index) if candidate_count > 0 => {
                self.candidate_weight_base
                    + self.candidate_weight_span
                        * (1.0 - index as f64 / candidate_count as f64)
            }
            _ => self.probe_weight,
        }
    }
}

/// Pick the guesses worth scoring for the current candidates
///
/// - up to `exhaustive_threshold` candidates: the candidates themselves
/// - more than `pool_ceiling`: a prefix of the candidates plus a prefix of
///   the corpus, half the ceiling each and never fewer than one
/// - otherwise: the whole corpus
///
/// Duplicates are dropped, keeping first occurrence.
#[must_use]
pub fn select_guess_pool<'a>(
    candidates: &[&'a Word],
    corpus: &'a [Word],
    config: &RankingConfig,
) -> Vec<&'a Word> {
    if candidates.len() <= config.exhaustive_threshold {
        dedup(candidates.iter().copied())
    } else if candidates.len() > config.pool_ceiling {
        let half = (config.pool_ceiling / 2).max(1);
        dedup(
            candidates
                .iter()
                .copied()
                .take(half)
                .chain(corpus.iter().take(half)),
        )
    } else {
        dedup(corpus.iter())
    }
}

fn dedup<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.text()))
        .collect()
}

/// A guess with its entropy and weighted score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub entropy: f64,
    pub score: f64,
}

/// Batched scorer over a fixed guess pool
///
/// Holds its own copy of the candidate references, so nothing it reads can
/// change between batches.
pub struct Scorer<'a> {
    pool: Vec<&'a Word>,
    candidates: Vec<&'a Word>,
    positions: FxHashMap<&'a str, usize>,
    config: RankingConfig,
    scored: Vec<ScoredGuess<'a>>,
    next: usize,
}

impl<'a> Scorer<'a> {
    #[must_use]
    pub fn new(candidates: &[&'a Word], corpus: &'a [Word], config: &RankingConfig) -> Self {
        let pool = select_guess_pool(candidates, corpus, config);

        let mut positions = FxHashMap::default();
        for (index, word) in candidates.iter().enumerate() {
            positions.entry(word.text()).or_insert(index);
        }

        Self {
            scored: Vec::with_capacity(pool.len()),
            pool,
            candidates: candidates.to_vec(),
            positions,
            config: config.clone(),
            next: 0,
        }
    }

    /// Number of guesses being scored
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            processed: self.next,
            total: self.pool.len(),
        }
    }

    /// Score the next batch, or return `None` once the pool is exhausted
    ///
    /// Guesses inside a batch are scored in parallel; results keep pool order.
    pub fn score_next_batch(&mut self) -> Option<Progress> {
        if self.next >= self.pool.len() {
            return None;
        }

        let end = (self.next + self.config.batch_size.max(1)).min(self.pool.len());
        let batch = &self.pool[self.next..end];
        let candidates = &self.candidates;
        let positions = &self.positions;
        let config = &self.config;

        let scored: Vec<ScoredGuess<'a>> = batch
            .par_iter()
            .map(|&word| {
                let entropy = calculate_entropy(word, candidates);
                let weight =
                    config.frequency_weight(positions.get(word.text()).copied(), candidates.len());
                ScoredGuess {
                    word,
                    entropy,
                    score: entropy * weight,
                }
            })
            .collect();

        self.scored.extend(scored);
        self.next = end;
        Some(self.progress())
    }

    /// Finish any remaining batches and return guesses by descending score
    ///
    /// Equal scores keep pool order.
    #[must_use]
    pub fn into_ranking(mut self) -> Vec<ScoredGuess<'a>> {
        while self.score_next_batch().is_some() {}
        self.scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        self.scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn default_config_matches_documented_constants() {
        let config = RankingConfig::default();
        assert_eq!(config.pool_ceiling, 2000);
        assert_eq!(config.exhaustive_threshold, 10);
        assert_eq!(config.batch_size, 50);
        assert_eq!(config.suggestion_count, 8);
        assert_eq!(config.cache_policy, CachePolicy::ReuseOnOverlap);
    }

    #[test]
    fn earlier_candidates_weigh_more() {
        let config = RankingConfig::default();
        let first = config.frequency_weight(Some(0), 4);
        let last = config.frequency_weight(Some(3), 4);
        let probe = config.frequency_weight(None, 4);

        assert!(first > last);
        assert!(last > probe);
        assert!((last - 1.225).abs() < 1e-9);
    }

    #[test]
    fn small_sets_use_candidates_only() {
        let corpus = words(&["crane", "slate", "trace", "brace"]);
        let candidates: Vec<&Word> = vec![&corpus[2], &corpus[3]];

        let pool = select_guess_pool(&candidates, &corpus, &RankingConfig::default());
        let texts: Vec<&str> = pool.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["trace", "brace"]);
    }

    #[test]
    fn medium_sets_use_whole_corpus() {
        let corpus = words(&["crane", "slate", "trace", "brace", "place"]);
        let candidates: Vec<&Word> = corpus.iter().skip(1).collect();
        let config = RankingConfig {
            exhaustive_threshold: 2,
            ..RankingConfig::default()
        };

        let pool = select_guess_pool(&candidates, &corpus, &config);
        assert_eq!(pool.len(), corpus.len());
        assert_eq!(pool[0].text(), "crane");
    }

    #[test]
    fn large_sets_mix_candidate_and_corpus_prefixes() {
        let corpus = words(&["crane", "slate", "trace", "brace", "place", "grace"]);
        let candidates: Vec<&Word> = corpus.iter().rev().collect();
        let config = RankingConfig {
            exhaustive_threshold: 1,
            pool_ceiling: 4,
            ..RankingConfig::default()
        };

        let pool = select_guess_pool(&candidates, &corpus, &config);
        let texts: Vec<&str> = pool.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["grace", "place", "crane", "slate"]);
    }

    #[test]
    fn tiny_ceiling_still_yields_a_pool() {
        let corpus = words(&["crane", "slate", "trace", "brace", "place", "grace"]);
        let candidates: Vec<&Word> = corpus.iter().rev().collect();

        for pool_ceiling in [0, 1] {
            let config = RankingConfig {
                exhaustive_threshold: 1,
                pool_ceiling,
                ..RankingConfig::default()
            };
            let pool = select_guess_pool(&candidates, &corpus, &config);
            let texts: Vec<&str> = pool.iter().map(|w| w.text()).collect();
            assert_eq!(texts, vec!["grace", "crane"]);
        }
    }

    #[test]
    fn pool_is_deduplicated() {
        let corpus = words(&["crane", "crane", "slate"]);
        let candidates: Vec<&Word> = corpus.iter().collect();

        let pool = select_guess_pool(&candidates, &corpus, &RankingConfig::default());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn scorer_reports_batches() {
        let corpus = words(&["crane", "slate", "trace", "brace", "place"]);
        let candidates: Vec<&Word> = corpus.iter().collect();
        let config = RankingConfig {
            batch_size: 2,
            ..RankingConfig::default()
        };

        let mut scorer = Scorer::new(&candidates, &corpus, &config);
        assert_eq!(scorer.pool_size(), 5);

        let steps: Vec<usize> = std::iter::from_fn(|| scorer.score_next_batch())
            .map(|p| p.processed)
            .collect();
        assert_eq!(steps, vec![2, 4, 5]);
        assert!(scorer.progress().is_complete());
    }

    #[test]
    fn ranking_orders_by_weighted_entropy() {
        // Against these candidates AEROS splits better than AAAAA
        let corpus = words(&["aaaaa", "aeros", "slate", "irate", "crate", "grate"]);
        let candidates: Vec<&Word> = corpus[2..].iter().collect();
        let config = RankingConfig {
            exhaustive_threshold: 0,
            ..RankingConfig::default()
        };

        let ranking = Scorer::new(&candidates, &corpus, &config).into_ranking();
        assert_eq!(ranking.len(), 6);
        assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranking.last().unwrap().word.text(), "aaaaa");
        for scored in &ranking {
            assert!(scored.entropy >= 0.0);
        }
    }

    #[test]
    fn equal_scores_keep_pool_order() {
        // The three probes cannot tell the candidates apart
        let corpus = words(&["zzzzz", "yyyyy", "xxxxx", "aaaaa", "bbbbb"]);
        let candidates: Vec<&Word> = corpus[3..].iter().collect();
        let config = RankingConfig {
            exhaustive_threshold: 0,
            ..RankingConfig::default()
        };

        let ranking = Scorer::new(&candidates, &corpus, &config).into_ranking();
        let texts: Vec<&str> = ranking.iter().map(|s| s.word.text()).collect();
        assert_eq!(&texts[..2], &["aaaaa", "bbbbb"]);
        assert_eq!(&texts[2..], &["zzzzz", "yyyyy", "xxxxx"]);
    }
}
