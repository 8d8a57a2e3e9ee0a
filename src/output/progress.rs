//! Terminal progress bar for ranking sweeps and word-list loading

use crate::progress::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Shows progress reports as an `indicatif` bar on stderr
///
/// The bar appears on the first report and is cleared at 100.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn start() -> ProgressBar {
        let bar = ProgressBar::new(100);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg:<18} [{bar:40.cyan/blue}] {pos:>3}%")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar
    }
}

impl ProgressSink for TerminalProgress {
    fn report(&mut self, percent: u8, stage: &str) {
        let bar = self.bar.get_or_insert_with(Self::start);
        bar.set_message(stage.to_string());
        bar.set_position(u64::from(percent));

        if percent >= 100 {
            bar.finish_and_clear();
            self.bar = None;
        }
    }
}
