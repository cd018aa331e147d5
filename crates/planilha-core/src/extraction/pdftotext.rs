use crate::error::ConversionError;
use crate::extraction::TableDetector;
use crate::model::ExtractedTable;
use std::path::Path;
use std::process::Command;

/// Table detection backend using pdftotext (from poppler-utils).
///
/// Runs `pdftotext -layout` over the whole document; the layout mode
/// preserves whitespace alignment, so table columns arrive as runs of
/// two or more spaces between cells.
pub struct PdftotextDetector;

impl PdftotextDetector {
    pub fn new() -> Self {
        PdftotextDetector
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDetector for PdftotextDetector {
    fn detect_tables(&self, pdf_path: &Path) -> Result<Vec<ExtractedTable>, ConversionError> {
        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(pdf_path)
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConversionError::PdftotextNotFound
                } else {
                    ConversionError::Detection(format!("pdftotext failed to start: {e}"))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ConversionError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(tables_from_layout(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Group the layout text into table grids.
///
/// A table is a contiguous run of lines that split into at least two
/// columns; a blank or single-column line ends the current table. Pages
/// (pdftotext uses form feed \x0c as page separator) never share a table.
fn tables_from_layout(text: &str) -> Vec<ExtractedTable> {
    let mut tables = Vec::new();

    for page_text in text.split('\x0c') {
        let mut rows: Vec<Vec<String>> = Vec::new();

        for line in page_text.lines() {
            let cells = split_columns(line);
            if cells.len() >= 2 {
                rows.push(cells);
            } else if !rows.is_empty() {
                tables.push(ExtractedTable {
                    rows: std::mem::take(&mut rows),
                });
            }
        }

        if !rows.is_empty() {
            tables.push(ExtractedTable { rows });
        }
    }

    tables
}

/// Split a layout line into cells on runs of two or more spaces.
/// Single spaces stay inside a cell ("mg/kg TS" is one cell).
fn split_columns(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut spaces = 0usize;

    for ch in line.trim_end().chars() {
        match ch {
            ' ' => spaces += 1,
            '\t' => spaces += 2,
            _ => {
                if spaces >= 2 && !current.is_empty() {
                    cells.push(std::mem::take(&mut current));
                } else if spaces > 0 && !current.is_empty() {
                    current.push(' ');
                }
                spaces = 0;
                current.push(ch);
            }
        }
    }

    if !current.is_empty() {
        cells.push(current);
    }

    cells
}
