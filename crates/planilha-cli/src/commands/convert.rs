use planilha_core::error::ConversionError;
use planilha_core::extraction::pdftotext::PdftotextDetector;
use planilha_core::model::InputDocument;
use std::path::{Path, PathBuf};

use crate::output;
use crate::ui::notify::TerminalNotifier;
use crate::ui::progress::BarReporter;

pub fn run(
    inputs: Vec<PathBuf>,
    output_path: &Path,
    format: &str,
    quiet: bool,
) -> Result<(), ConversionError> {
    if !PdftotextDetector::is_available() {
        return Err(ConversionError::PdftotextNotFound);
    }

    let documents: Vec<InputDocument> = inputs.into_iter().map(InputDocument::new).collect();
    let detector = PdftotextDetector::new();
    let progress = BarReporter::new(documents.len() as u64, !quiet);
    let notifier = TerminalNotifier;

    let summary =
        planilha_core::convert_batch(&documents, output_path, &detector, &progress, &notifier)?;

    match format {
        "json" => output::json::print_summary(&summary)?,
        _ => output::table::print_summary(&summary),
    }

    Ok(())
}
