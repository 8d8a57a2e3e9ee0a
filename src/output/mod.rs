//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod progress;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use progress::TerminalProgress;
