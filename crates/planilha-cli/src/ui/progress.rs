use indicatif::{ProgressBar, ProgressStyle};
use planilha_core::progress::ProgressReporter;

/// Terminal progress bar for a conversion batch, one tick per document.
pub struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    pub fn new(total: u64, enabled: bool) -> Self {
        if !enabled {
            return BarReporter {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        BarReporter { bar }
    }
}

impl ProgressReporter for BarReporter {
    fn on_progress(&self, processed: usize, total: usize, label: &str) {
        self.bar.set_position(processed as u64);
        self.bar
            .set_message(format!("Converting {label}... ({processed}/{total})"));
    }

    fn on_complete(&self) {
        self.bar.finish_with_message("Conversion complete");
    }
}
