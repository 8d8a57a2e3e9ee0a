//! Solver session
//!
//! A `Session` owns everything that changes while one puzzle is being solved:
//! the candidate set, the cached ranking and the stack of rankings saved
//! before each filtering step. The corpus is borrowed and never changes.
//!
//! The caller keeps the [`GuessHistory`]; the session only reads it when
//! rolling back.

use super::cycler::{Suggestion, SuggestionCycler};
use super::error::{InputKind, SessionError};
use super::ranking::{CachePolicy, RankingConfig, ScoredGuess, Scorer};
use crate::core::{GuessHistory, Pattern, Word};
use crate::progress::{NoProgress, Progress, ProgressSink, SCORING_STAGE};
use crate::wordlists::Corpus;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Candidate-set manager for one puzzle
#[derive(Debug)]
pub struct Session<'a> {
    corpus: &'a Corpus,
    config: RankingConfig,
    candidates: Vec<&'a Word>,
    cache: Option<Vec<&'a Word>>,
    cache_history: Vec<Option<Vec<&'a Word>>>,
    cycler: SuggestionCycler<'a>,
}

/// Result of starting a ranking
///
/// Small candidate sets and cache hits are answered at once. Everything else
/// needs a sweep over the guess pool.
pub enum Ranking<'s, 'a> {
    Ready(Vec<&'a Word>),
    Sweep(RankingSweep<'s, 'a>),
}

/// An in-progress ranking sweep
///
/// Scores one batch per [`next_batch`](Self::next_batch) call so the caller
/// can do other work in between. The sweep holds the session mutably, so the
/// candidate set cannot change until it is finished or dropped. Dropping it
/// discards the partial work.
pub struct RankingSweep<'s, 'a> {
    session: &'s mut Session<'a>,
    scorer: Scorer<'a>,
    limit: usize,
}

impl<'a> Session<'a> {
    /// Start a session with every corpus word as a candidate
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::solver::{RankingConfig, Session};
    /// use wordle_advisor::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_words(["crane", "slate", "trace"], 5).unwrap();
    /// let session = Session::new(&corpus, RankingConfig::default());
    /// assert_eq!(session.candidate_count(), 3);
    /// ```
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: RankingConfig) -> Self {
        Self {
            corpus,
            config,
            candidates: corpus.iter().collect(),
            cache: None,
            cache_history: Vec::new(),
            cycler: SuggestionCycler::new(),
        }
    }

    /// Start a session and apply every entry of `history` in order
    ///
    /// # Errors
    /// Returns the first error any entry produces.
    pub fn resume(
        corpus: &'a Corpus,
        config: RankingConfig,
        history: &GuessHistory,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(corpus, config);
        for guess in history {
            session.filter(&guess.word, guess.pattern)?;
        }
        Ok(session)
    }

    /// Discard all feedback and start over from the full corpus
    pub fn restart(&mut self) {
        self.candidates = self.corpus.iter().collect();
        self.cache = None;
        self.cache_history.clear();
        self.cycler.reset();
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.corpus.word_length()
    }

    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Exactly one candidate is left
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    #[must_use]
    pub const fn has_cached_ranking(&self) -> bool {
        self.cache.is_some()
    }

    /// Number of saved rankings available to rollback
    #[must_use]
    pub fn cache_depth(&self) -> usize {
        self.cache_history.len()
    }

    fn validate(&self, guess: &Word, pattern: Pattern) -> Result<(), SessionError> {
        let expected = self.word_length();
        if guess.length() != expected {
            return Err(SessionError::LengthMismatch {
                input: InputKind::Guess,
                expected,
                found: guess.length(),
            });
        }
        if pattern.length() != expected {
            return Err(SessionError::LengthMismatch {
                input: InputKind::Pattern,
                expected,
                found: pattern.length(),
            });
        }
        Ok(())
    }

    /// Candidates that would survive the feedback, or `None` if none would
    fn narrow(&self, guess: &Word, pattern: Pattern) -> Option<Vec<&'a Word>> {
        let retained: Vec<&'a Word> = self
            .candidates
            .iter()
            .copied()
            .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
            .collect();
        (!retained.is_empty()).then_some(retained)
    }

    /// Keep only the candidates that produce `pattern` against `guess`
    ///
    /// Returns the new candidate count. On success the cached ranking is
    /// saved for rollback and cleared.
    ///
    /// # Errors
    /// - `SessionError::LengthMismatch` if either input has the wrong length
    /// - `SessionError::InconsistentFeedback` if no candidate would remain;
    ///   the session is left unchanged
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    /// use wordle_advisor::solver::{RankingConfig, Session};
    /// use wordle_advisor::wordlists::Corpus;
    ///
    /// let corpus = Corpus::from_words(["crane", "slate", "trace", "place", "brace"], 5).unwrap();
    /// let mut session = Session::new(&corpus, RankingConfig::default());
    ///
    /// let crane = Word::new("crane").unwrap();
    /// assert_eq!(session.filter(&crane, Pattern::parse("12202").unwrap()), Ok(2));
    /// assert!(session.filter(&crane, Pattern::parse("02202").unwrap()).is_err());
    /// assert_eq!(session.candidate_count(), 2);
    /// ```
    pub fn filter(&mut self, guess: &Word, pattern: Pattern) -> Result<usize, SessionError> {
        self.validate(guess, pattern)?;

        let before = self.candidates.len();
        let Some(retained) = self.narrow(guess, pattern) else {
            warn!(%guess, %pattern, candidates = before, "rejected inconsistent feedback");
            return Err(SessionError::InconsistentFeedback {
                guess: guess.clone(),
                pattern,
            });
        };

        self.cache_history.push(self.cache.take());
        self.candidates = retained;
        self.cycler.reset();

        info!(%guess, %pattern, before, after = self.candidates.len(), "filtered candidates");
        Ok(self.candidates.len())
    }

    /// Parse raw input and [`filter`](Self::filter) with it
    ///
    /// # Errors
    /// `SessionError::InvalidWord` or `SessionError::InvalidPattern` for
    /// unparseable input, otherwise as [`filter`](Self::filter).
    pub fn submit(&mut self, guess: &str, feedback: &str) -> Result<usize, SessionError> {
        let guess = Word::new(guess.trim())?;
        let pattern = Pattern::parse(feedback.trim())?;
        self.filter(&guess, pattern)
    }

    /// Rebuild the candidate set from the corpus by replaying `history`
    ///
    /// The ranking saved by the most recent filter is restored. Entries that
    /// would empty the candidate set are skipped. Returns the new candidate
    /// count.
    ///
    /// # Errors
    /// Returns `SessionError::LengthMismatch` if any entry has the wrong
    /// length; the session is left unchanged.
    pub fn rollback(&mut self, history: &GuessHistory) -> Result<usize, SessionError> {
        for guess in history {
            self.validate(&guess.word, guess.pattern)?;
        }

        let restored = self.cache_history.pop().flatten();
        self.candidates = self.corpus.iter().collect();

        for guess in history {
            match self.narrow(&guess.word, guess.pattern) {
                Some(retained) => self.candidates = retained,
                None => warn!(
                    guess = %guess.word,
                    pattern = %guess.pattern,
                    "skipped inconsistent history entry during replay"
                ),
            }
        }

        self.cache = restored;
        self.cycler.reset();

        info!(
            entries = history.len(),
            candidates = self.candidates.len(),
            restored_cache = self.cache.is_some(),
            "rolled back"
        );
        Ok(self.candidates.len())
    }

    fn cached_ranking(&mut self, limit: usize) -> Option<Vec<&'a Word>> {
        if self.config.cache_policy == CachePolicy::AlwaysRecompute {
            return None;
        }

        let cache = self.cache.as_ref()?;
        let members: FxHashSet<&str> = self.candidates.iter().map(|w| w.text()).collect();
        let still_valid: Vec<&'a Word> = cache
            .iter()
            .copied()
            .filter(|w| members.contains(w.text()))
            .collect();

        if still_valid.is_empty() {
            debug!("cached ranking no longer overlaps candidates, discarding");
            self.cache = None;
            return None;
        }

        debug!(reused = still_valid.len(), "reusing cached ranking");
        Some(still_valid.into_iter().take(limit).collect())
    }

    /// Start ranking the best `limit` guesses
    ///
    /// Empty, one- and two-candidate sets are answered directly from the
    /// candidates, as is a valid cached ranking. Otherwise a sweep is
    /// returned.
    pub fn begin_ranking(&mut self, limit: usize) -> Ranking<'_, 'a> {
        if limit == 0 {
            return Ranking::Ready(Vec::new());
        }

        if self.candidates.len() <= 2 {
            return Ranking::Ready(self.candidates.iter().copied().take(limit).collect());
        }

        if let Some(ranking) = self.cached_ranking(limit) {
            return Ranking::Ready(ranking);
        }

        let corpus: &'a Corpus = self.corpus;
        let scorer = Scorer::new(&self.candidates, corpus.words(), &self.config);
        debug!(
            pool = scorer.pool_size(),
            candidates = self.candidates.len(),
            "starting ranking sweep"
        );
        Ranking::Sweep(RankingSweep {
            session: self,
            scorer,
            limit,
        })
    }

    /// The best `limit` guesses, best first
    #[must_use]
    pub fn rank(&mut self, limit: usize) -> Vec<&'a Word> {
        self.rank_with_progress(limit, &mut NoProgress)
    }

    /// [`rank`](Self::rank), reporting sweep progress to `progress`
    ///
    /// Reports 0 when a sweep starts, then each time the whole percentage
    /// increases, ending with 100. Nothing is reported when no sweep is
    /// needed.
    pub fn rank_with_progress(
        &mut self,
        limit: usize,
        progress: &mut impl ProgressSink,
    ) -> Vec<&'a Word> {
        match self.begin_ranking(limit) {
            Ranking::Ready(words) => words,
            Ranking::Sweep(mut sweep) => {
                let mut reported = 0;
                progress.report(reported, SCORING_STAGE);
                while let Some(step) = sweep.next_batch() {
                    let percent = step.percent();
                    if percent > reported {
                        reported = percent;
                        progress.report(percent, SCORING_STAGE);
                    }
                }
                if reported < 100 {
                    progress.report(100, SCORING_STAGE);
                }
                sweep.finish()
            }
        }
    }

    /// The single best guess
    ///
    /// # Errors
    /// Returns `SessionError::EmptyCandidateSet` when no candidate remains.
    pub fn best_guess(&mut self) -> Result<&'a Word, SessionError> {
        self.best_guess_with_progress(&mut NoProgress)
    }

    /// [`best_guess`](Self::best_guess) with progress reporting
    ///
    /// # Errors
    /// Returns `SessionError::EmptyCandidateSet` when no candidate remains.
    pub fn best_guess_with_progress(
        &mut self,
        progress: &mut impl ProgressSink,
    ) -> Result<&'a Word, SessionError> {
        if self.candidates.is_empty() {
            return Err(SessionError::EmptyCandidateSet);
        }
        self.rank_with_progress(1, progress)
            .first()
            .copied()
            .ok_or(SessionError::EmptyCandidateSet)
    }

    /// Step to the next of the top suggestions
    ///
    /// The first call after a change to the candidate set ranks the top
    /// `suggestion_count` guesses; later calls cycle through them.
    ///
    /// # Errors
    /// Returns `SessionError::NoAlternative` with one candidate or fewer.
    pub fn next_suggestion(&mut self) -> Result<Suggestion<'a>, SessionError> {
        self.next_suggestion_with_progress(&mut NoProgress)
    }

    /// [`next_suggestion`](Self::next_suggestion) with progress reporting
    ///
    /// # Errors
    /// Returns `SessionError::NoAlternative` with one candidate or fewer.
    pub fn next_suggestion_with_progress(
        &mut self,
        progress: &mut impl ProgressSink,
    ) -> Result<Suggestion<'a>, SessionError> {
        if self.candidates.len() <= 1 {
            return Err(SessionError::NoAlternative);
        }

        if self.cycler.needs_ranking() {
            let count = self.config.suggestion_count.min(self.candidates.len());
            let ranking = self.rank_with_progress(count, progress);
            self.cycler.load(ranking);
        }

        self.cycler.advance().ok_or(SessionError::NoAlternative)
    }
}

impl<'a> RankingSweep<'_, 'a> {
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.scorer.progress()
    }

    /// Number of guesses the sweep scores
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.scorer.pool_size()
    }

    /// Score one batch; `None` once every guess is scored
    pub fn next_batch(&mut self) -> Option<Progress> {
        self.scorer.score_next_batch()
    }

    /// Complete the sweep, cache the full ranking and return the top guesses
    #[must_use]
    pub fn finish(self) -> Vec<&'a Word> {
        self.finish_scored().into_iter().map(|s| s.word).collect()
    }

    /// Like [`finish`](Self::finish) but keeps each guess's scores
    #[must_use]
    pub fn finish_scored(self) -> Vec<ScoredGuess<'a>> {
        let mut ranking = self.scorer.into_ranking();
        debug!(scored = ranking.len(), "ranking sweep finished");

        self.session.cache = Some(ranking.iter().map(|s| s.word).collect());
        ranking.truncate(self.limit);
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: [&str; 5] = ["crane", "slate", "trace", "place", "brace"];

    const MEDIUM: [&str; 16] = [
        "crane", "slate", "trace", "place", "brace", "grace", "irate", "crate", "grate", "raise",
        "robot", "speed", "erase", "floor", "table", "llama",
    ];

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::from_words(words, 5).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn filter_keeps_matching_candidates() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());

        assert_eq!(session.filter(&word("crane"), pattern("12202")), Ok(2));
        assert_eq!(texts(session.candidates()), vec!["trace", "brace"]);
        assert_eq!(session.cache_depth(), 1);
    }

    #[test]
    fn filter_rejects_feedback_matching_nothing() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());

        let err = session.filter(&word("crane"), pattern("02202")).unwrap_err();
        assert!(matches!(err, SessionError::InconsistentFeedback { .. }));
        assert_eq!(session.candidate_count(), 5);
        assert_eq!(session.cache_depth(), 0);
    }

    #[test]
    fn second_contradictory_filter_keeps_first_result() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());

        session.filter(&word("crane"), pattern("12202")).unwrap();
        let err = session.filter(&word("slate"), pattern("22222")).unwrap_err();

        assert!(matches!(err, SessionError::InconsistentFeedback { .. }));
        assert_eq!(texts(session.candidates()), vec!["trace", "brace"]);
        assert_eq!(session.cache_depth(), 1);
    }

    #[test]
    fn filter_is_sound_on_sample_corpus() {
        let corpus = crate::wordlists::loader::sample_corpus().unwrap();
        let guess = word("crane");
        let observed = Pattern::calculate(&guess, &word("brace"));

        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&guess, observed).unwrap();

        let kept: FxHashSet<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert!(kept.contains("brace"));
        for candidate in corpus.iter() {
            let matches = Pattern::calculate(&guess, candidate) == observed;
            assert_eq!(kept.contains(candidate.text()), matches, "{candidate}");
        }
    }

    #[test]
    fn filter_rejects_wrong_lengths() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());

        assert_eq!(
            session.filter(&word("cat"), pattern("000")),
            Err(SessionError::LengthMismatch {
                input: InputKind::Guess,
                expected: 5,
                found: 3
            })
        );
        assert_eq!(
            session.filter(&word("crane"), pattern("0000")),
            Err(SessionError::LengthMismatch {
                input: InputKind::Pattern,
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn submit_parses_input() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());

        assert!(matches!(
            session.submit("cr4ne", "00000"),
            Err(SessionError::InvalidWord(_))
        ));
        assert!(matches!(
            session.submit("crane", "00x00"),
            Err(SessionError::InvalidPattern(_))
        ));
        assert_eq!(session.submit(" CRANE ", "YGG-G"), Ok(2));
    }

    #[test]
    fn single_candidate_ranks_without_sweep() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&word("crane"), pattern("00202")).unwrap();

        assert!(session.is_solved());
        assert!(matches!(session.begin_ranking(5), Ranking::Ready(ref w) if w.len() == 1));
        assert_eq!(texts(&session.rank(5)), vec!["slate"]);
        assert!(!session.has_cached_ranking());
        assert_eq!(session.best_guess().unwrap().text(), "slate");
    }

    #[test]
    fn two_candidates_rank_in_candidate_order() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&word("crane"), pattern("12202")).unwrap();

        assert_eq!(texts(&session.rank(8)), vec!["trace", "brace"]);
        assert_eq!(texts(&session.rank(1)), vec!["trace"]);
        assert!(!session.has_cached_ranking());
    }

    #[test]
    fn empty_candidates_rank_to_nothing() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.candidates.clear();

        assert!(session.rank(5).is_empty());
        assert_eq!(session.best_guess(), Err(SessionError::EmptyCandidateSet));
        assert!(session.rank(0).is_empty());
    }

    #[test]
    fn sweep_caches_full_ranking() {
        let corpus = corpus(&MEDIUM);
        let mut session = Session::new(&corpus, RankingConfig::default());

        let Ranking::Sweep(sweep) = session.begin_ranking(3) else {
            panic!("sixteen candidates need a sweep");
        };
        assert_eq!(sweep.pool_size(), 16);
        let scored = sweep.finish_scored();
        assert_eq!(scored.len(), 3);
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

        assert!(session.has_cached_ranking());
        let cached = session.rank(3);
        assert_eq!(
            texts(&cached),
            scored.iter().map(|s| s.word.text()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn strict_policy_always_sweeps() {
        let corpus = corpus(&MEDIUM);
        let config = RankingConfig {
            cache_policy: CachePolicy::AlwaysRecompute,
            ..RankingConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let first = session.rank(3);
        assert!(matches!(session.begin_ranking(3), Ranking::Sweep(_)));
        assert_eq!(session.rank(3), first);
    }

    #[test]
    fn filter_invalidates_cache_and_rollback_restores_it() {
        let corpus = corpus(&MEDIUM);
        let mut session = Session::new(&corpus, RankingConfig::default());
        let before = session.rank(3);
        assert!(session.has_cached_ranking());

        let mut history = GuessHistory::new();
        let guess = word("crane");
        let observed = Pattern::calculate(&guess, &word("grate"));
        session.filter(&guess, observed).unwrap();
        history.push(guess, observed);

        assert!(!session.has_cached_ranking());
        assert_eq!(session.cache_depth(), 1);

        history.pop();
        assert_eq!(session.rollback(&history), Ok(16));
        assert!(session.has_cached_ranking());
        assert_eq!(session.cache_depth(), 0);
        assert_eq!(session.rank(3), before);
    }

    #[test]
    fn restored_ranking_drops_words_that_are_no_longer_candidates() {
        let corpus = corpus(&MEDIUM);
        let config = RankingConfig {
            exhaustive_threshold: 2,
            ..RankingConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let mut history = GuessHistory::new();
        let robot = word("robot");
        let observed = Pattern::calculate(&robot, &word("crane"));
        assert_eq!(session.filter(&robot, observed), Ok(3));
        history.push(robot, observed);

        // Scored against the whole corpus, so probe words lead the ranking too
        let full = session.rank(corpus.len());
        assert_eq!(full.len(), corpus.len());

        let crane = word("crane");
        let observed = Pattern::calculate(&crane, &word("grace"));
        session.filter(&crane, observed).unwrap();
        assert_eq!(session.rollback(&history), Ok(3));
        assert!(session.has_cached_ranking());

        let members = texts(session.candidates());
        let expected: Vec<&str> = texts(&full)
            .into_iter()
            .filter(|w| members.contains(w))
            .collect();
        assert_eq!(expected.len(), 3);

        assert!(matches!(session.begin_ranking(3), Ranking::Ready(_)));
        assert_eq!(texts(&session.rank(corpus.len())), expected);
        assert_eq!(texts(&session.rank(2)), &expected[..2]);
    }

    #[test]
    fn rollback_replay_reproduces_candidates() {
        let corpus = corpus(&MEDIUM);
        let history = GuessHistory::parse("crane 02202\nslate 00222").unwrap();

        let mut session = Session::resume(&corpus, RankingConfig::default(), &history).unwrap();
        let snapshot: Vec<&str> = texts(session.candidates());
        assert!(!snapshot.is_empty());

        session.rollback(&history).unwrap();
        assert_eq!(texts(session.candidates()), snapshot);
    }

    #[test]
    fn rollback_undoes_last_entry() {
        let corpus = corpus(&SMALL);
        let mut history = GuessHistory::parse("crane 12202").unwrap();
        let mut session = Session::resume(&corpus, RankingConfig::default(), &history).unwrap();

        let guess = word("trace");
        let observed = pattern("22222");
        session.filter(&guess, observed).unwrap();
        history.push(guess, observed);
        assert!(session.is_solved());

        history.pop();
        assert_eq!(session.rollback(&history), Ok(2));
        assert_eq!(texts(session.candidates()), vec!["trace", "brace"]);
    }

    #[test]
    fn rollback_skips_contradictory_entries() {
        let corpus = corpus(&SMALL);
        let mut history = GuessHistory::new();
        history.push(word("crane"), pattern("12202"));
        history.push(word("slate"), pattern("22222"));

        let mut session = Session::new(&corpus, RankingConfig::default());
        assert_eq!(session.rollback(&history), Ok(2));
        assert_eq!(texts(session.candidates()), vec!["trace", "brace"]);
    }

    #[test]
    fn rollback_with_malformed_entry_changes_nothing() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&word("crane"), pattern("12202")).unwrap();

        let mut history = GuessHistory::new();
        history.push(word("crane"), pattern("12202"));
        history.push(word("cat"), pattern("000"));

        assert!(matches!(
            session.rollback(&history),
            Err(SessionError::LengthMismatch { .. })
        ));
        assert_eq!(session.candidate_count(), 2);
        assert_eq!(session.cache_depth(), 1);
    }

    #[test]
    fn resume_stops_at_first_rejection() {
        let corpus = corpus(&SMALL);
        let history = GuessHistory::parse("crane 12202\nslate 22222").unwrap();

        let err = Session::resume(&corpus, RankingConfig::default(), &history).unwrap_err();
        assert!(matches!(err, SessionError::InconsistentFeedback { ref guess, .. } if guess.text() == "slate"));
    }

    #[test]
    fn restart_returns_to_full_corpus() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&word("crane"), pattern("12202")).unwrap();

        session.restart();
        assert_eq!(session.candidate_count(), 5);
        assert_eq!(session.cache_depth(), 0);
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let corpus = corpus(&MEDIUM);
        let config = RankingConfig {
            batch_size: 4,
            ..RankingConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let mut reports = Vec::new();
        let ranking = session.rank_with_progress(2, &mut |percent: u8, stage: &str| {
            assert_eq!(stage, SCORING_STAGE);
            reports.push(percent);
        });

        assert_eq!(ranking.len(), 2);
        assert_eq!(reports, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn small_ceiling_bounds_the_pool() {
        let corpus = corpus(&MEDIUM);
        let config = RankingConfig {
            pool_ceiling: 6,
            exhaustive_threshold: 2,
            ..RankingConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let Ranking::Sweep(sweep) = session.begin_ranking(1) else {
            panic!("expected a sweep");
        };
        // Candidate and corpus prefixes coincide before any filtering
        assert_eq!(sweep.pool_size(), 3);
    }

    #[test]
    fn tiny_pool_ceiling_still_ranks() {
        let corpus = corpus(&MEDIUM);
        for pool_ceiling in [0, 1] {
            let config = RankingConfig {
                pool_ceiling,
                ..RankingConfig::default()
            };
            let mut session = Session::new(&corpus, config);

            assert!(!session.rank(3).is_empty());
            assert_eq!(session.best_guess().map(Word::text), Ok("crane"));
        }
    }

    #[test]
    fn suggestions_cycle_through_top_ranking() {
        let corpus = corpus(&MEDIUM);
        let config = RankingConfig {
            suggestion_count: 3,
            cache_policy: CachePolicy::AlwaysRecompute,
            ..RankingConfig::default()
        };
        let expected = Session::new(&corpus, config.clone()).rank(3);
        let mut session = Session::new(&corpus, config);

        let cycle: Vec<(&str, usize)> = (0..4)
            .map(|_| {
                let s = session.next_suggestion().unwrap();
                assert_eq!(s.total, 3);
                (s.word.text(), s.position)
            })
            .collect();

        assert_eq!(
            cycle,
            vec![
                (expected[0].text(), 1),
                (expected[1].text(), 2),
                (expected[2].text(), 3),
                (expected[0].text(), 1),
            ]
        );

        session.filter(&word("crane"), pattern("00202")).unwrap();
        assert!(session.cycler.needs_ranking());
    }

    #[test]
    fn no_alternative_with_one_candidate() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&word("crane"), pattern("00202")).unwrap();

        assert_eq!(session.next_suggestion(), Err(SessionError::NoAlternative));
    }

    #[test]
    fn two_candidate_suggestions_alternate() {
        let corpus = corpus(&SMALL);
        let mut session = Session::new(&corpus, RankingConfig::default());
        session.filter(&word("crane"), pattern("12202")).unwrap();

        let first = session.next_suggestion().unwrap();
        let second = session.next_suggestion().unwrap();
        let third = session.next_suggestion().unwrap();
        assert_eq!(first.word.text(), "trace");
        assert_eq!(second.word.text(), "brace");
        assert_eq!(third, first);
    }
}
