pub mod batch;
pub mod consolidate;
pub mod error;
pub mod extraction;
pub mod model;
pub mod notify;
pub mod progress;
pub mod workbook;

use std::path::Path;

use error::ConversionError;
use extraction::TableDetector;
use model::{BatchSummary, InputDocument};
use notify::Notifier;
use progress::ProgressReporter;

/// Main API entry point: convert a batch of PDF documents into one
/// workbook, one sheet per document that yielded table data.
///
/// `detector` supplies the table-detection capability, `progress` is
/// called once per processed document, and `notifier` receives the
/// user-facing error/success messages. See [`batch::run`] for the
/// detailed contract.
pub fn convert_batch(
    documents: &[InputDocument],
    output_path: &Path,
    detector: &dyn TableDetector,
    progress: &dyn ProgressReporter,
    notifier: &dyn Notifier,
) -> Result<BatchSummary, ConversionError> {
    batch::run(documents, output_path, detector, progress, notifier)
}
