use std::path::PathBuf;

/// Outbound user-facing messages emitted by the pipeline.
///
/// These are signals only; the pipeline never waits for a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Extraction of one document failed. Emitted at most once per failing
    /// document; the batch continues.
    ExtractionFailed { path: PathBuf, message: String },
    /// The whole batch finished and the workbook was persisted.
    BatchCompleted { output_path: PathBuf },
}

/// Sink for user-facing notifications, implemented by the display layer.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Notifier that discards everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}
