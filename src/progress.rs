//! Progress notifications for long-running work
//!
//! Ranking sweeps and word-list processing report a 0-100 value plus a short
//! stage label. How that is shown is up to the receiver.

/// Stage label used while scoring guesses
pub const SCORING_STAGE: &str = "scoring guesses";

/// Stage label used while processing a word list
pub const LOADING_STAGE: &str = "processing words";

/// Receiver of coarse progress updates
pub trait ProgressSink {
    /// Called with a percentage in 0..=100 and a stage label
    fn report(&mut self, percent: u8, stage: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(u8, &str),
{
    fn report(&mut self, percent: u8, stage: &str) {
        self(percent, stage);
    }
}

/// Discards all progress updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _percent: u8, _stage: &str) {}
}

/// Position of a batched job after its latest batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    /// Completed share as a whole percentage, 100 for an empty job
    #[must_use]
    pub fn percent(self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.processed.min(self.total) * 100 / self.total) as u8
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.processed >= self.total
    }
}
