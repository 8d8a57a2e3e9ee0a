//! Alternate-suggestion cycling
//!
//! Holds a short ranking and hands its words out one at a time, wrapping at
//! the end, so asking for "another suggestion" never re-ranks.

use crate::core::Word;

/// One suggestion from the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub word: &'a Word,
    /// 1-based position within the held ranking
    pub position: usize,
    /// Length of the held ranking
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclerState {
    /// No ranking held
    Empty,
    /// Ranking held, cursor valid
    Ready,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionCycler<'a> {
    ranking: Vec<&'a Word>,
    cursor: usize,
}

impl<'a> SuggestionCycler<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ranking: Vec::new(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> CyclerState {
        if self.ranking.is_empty() {
            CyclerState::Empty
        } else {
            CyclerState::Ready
        }
    }

    #[must_use]
    pub fn needs_ranking(&self) -> bool {
        self.state() == CyclerState::Empty
    }

    /// Replace the held ranking and rewind the cursor
    pub fn load(&mut self, ranking: Vec<&'a Word>) {
        self.ranking = ranking;
        self.cursor = 0;
    }

    /// Return the word under the cursor and step past it
    ///
    /// Returns `None` only while no ranking is held.
    pub fn advance(&mut self) -> Option<Suggestion<'a>> {
        let word = *self.ranking.get(self.cursor)?;
        let suggestion = Suggestion {
            word,
            position: self.cursor + 1,
            total: self.ranking.len(),
        };
        self.cursor = (self.cursor + 1) % self.ranking.len();
        Some(suggestion)
    }

    /// Drop the held ranking
    pub fn reset(&mut self) {
        self.ranking.clear();
        self.cursor = 0;
    }
}
