use std::path::Path;

use crate::error::ConversionError;
use crate::extraction::{extract_document, TableDetector};
use crate::model::{BatchSummary, InputDocument};
use crate::notify::{Notification, Notifier};
use crate::progress::ProgressReporter;
use crate::workbook::WorkbookWriter;

/// Hard cap on documents per batch.
pub const MAX_BATCH_SIZE: usize = 10;

/// Run one conversion batch over `documents`, in submitted order.
///
/// Rejects an empty or oversized selection before touching the output
/// file. Each document is extracted and written strictly sequentially;
/// a soft extraction failure skips that document's sheet and the batch
/// continues. `progress` receives exactly one callback per document.
/// After the last document the workbook is formatted, persisted once,
/// and a success notification names the output path.
///
/// Only selection errors and workbook I/O faults abort the run.
pub fn run(
    documents: &[InputDocument],
    output_path: &Path,
    detector: &dyn TableDetector,
    progress: &dyn ProgressReporter,
    notifier: &dyn Notifier,
) -> Result<BatchSummary, ConversionError> {
    if documents.is_empty() {
        return Err(ConversionError::EmptySelection);
    }
    if documents.len() > MAX_BATCH_SIZE {
        return Err(ConversionError::TooManyDocuments {
            count: documents.len(),
            max: MAX_BATCH_SIZE,
        });
    }

    let mut writer = WorkbookWriter::open(output_path)?;
    let total = documents.len();
    let mut sheets_written = Vec::new();
    let mut skipped = Vec::new();

    for (i, doc) in documents.iter().enumerate() {
        let result = extract_document(detector, doc.path(), notifier);
        if result.is_empty() {
            skipped.push(doc.display_name().to_string());
        } else {
            writer.write_sheet(doc.display_name(), &result)?;
            sheets_written.push(doc.display_name().to_string());
        }
        progress.on_progress(i + 1, total, doc.display_name());
    }

    writer.finalize()?;
    progress.on_complete();
    notifier.notify(Notification::BatchCompleted {
        output_path: output_path.to_path_buf(),
    });

    Ok(BatchSummary {
        output_path: output_path.to_path_buf(),
        total_documents: total,
        sheets_written,
        skipped,
    })
}
