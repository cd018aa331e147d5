use planilha_core::error::ConversionError;
use planilha_core::extraction::pdftotext::PdftotextDetector;
use planilha_core::extraction::TableDetector;
use std::path::Path;

use crate::output;

pub fn run(input_file: &Path, output_format: &str) -> Result<(), ConversionError> {
    if !PdftotextDetector::is_available() {
        return Err(ConversionError::PdftotextNotFound);
    }

    let detector = PdftotextDetector::new();
    let tables = detector.detect_tables(input_file)?;

    match output_format {
        "json" => output::json::print_tables(&tables)?,
        _ => output::table::print_tables(&tables),
    }

    Ok(())
}
