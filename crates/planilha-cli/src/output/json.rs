use planilha_core::error::ConversionError;
use planilha_core::model::{BatchSummary, ExtractedTable};

pub fn print_summary(summary: &BatchSummary) -> Result<(), ConversionError> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}

pub fn print_tables(tables: &[ExtractedTable]) -> Result<(), ConversionError> {
    let json = serde_json::to_string_pretty(tables)?;
    println!("{json}");
    Ok(())
}
