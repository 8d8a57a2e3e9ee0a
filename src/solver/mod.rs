//! Guess ranking and candidate tracking
//!
//! [`Session`] is the entry point: it narrows the candidate set as feedback
//! arrives, ranks guesses by entropy and cycles through alternates.

mod cycler;
pub mod entropy;
mod error;
pub mod ranking;
mod session;

pub use cycler::{CyclerState, Suggestion, SuggestionCycler};
pub use error::{InputKind, SessionError};
pub use ranking::{CachePolicy, RankingConfig, ScoredGuess};
pub use session::{Ranking, RankingSweep, Session};
