//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod resume;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use play::run_play;
pub use resume::{load_history, resume_session};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
