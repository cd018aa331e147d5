/// Observer contract for batch progress.
///
/// The orchestrator calls `on_progress` synchronously after each document,
/// exactly once per document and in submitted order, then blocks until the
/// call returns. Implementations must not block indefinitely.
pub trait ProgressReporter {
    /// `processed` runs 1..=total; `label` is the current document's
    /// display name.
    fn on_progress(&self, processed: usize, total: usize, label: &str);

    /// Called once after the workbook is finalized, so displays can reset
    /// to a "conversion complete" state.
    fn on_complete(&self) {}
}

/// Reporter that ignores all callbacks, for embedding without a display.
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn on_progress(&self, _processed: usize, _total: usize, _label: &str) {}
}
