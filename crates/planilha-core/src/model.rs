use serde::Serialize;
use std::path::{Path, PathBuf};

/// Sheet names in a workbook are capped at 31 characters.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// One source PDF in a batch.
///
/// The display name doubles as the target sheet name: basename with the
/// extension removed, hard-truncated to the sheet-name limit. Derived once
/// at construction and immutable for the duration of the batch.
#[derive(Debug, Clone)]
pub struct InputDocument {
    path: PathBuf,
    display_name: String,
}

impl InputDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let display_name = truncate_chars(&stem, MAX_SHEET_NAME_LEN);
        InputDocument { path, display_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Truncate to at most `max` characters (not bytes).
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// A grid of string cells from one detected table region within a document.
/// Rows are ordered as they appear on the page; widths may vary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedTable {
    pub rows: Vec<Vec<String>>,
}

/// All detected tables of one document concatenated into a single grid.
///
/// Rows keep table order then row order. Every row is padded with empty
/// cells to the widest row, so the result is rectangular.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidatedResult {
    rows: Vec<Vec<String>>,
}

impl ConsolidatedResult {
    /// Build a result from raw rows, padding them to a uniform width.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        ConsolidatedResult { rows }
    }

    /// Zero rows: nothing was detected, or extraction soft-failed.
    pub fn empty() -> Self {
        ConsolidatedResult::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Outcome report for one completed batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub output_path: PathBuf,
    pub total_documents: usize,
    /// Sheet names written, in batch order.
    pub sheets_written: Vec<String>,
    /// Display names of documents that produced no sheet (empty or failed
    /// extraction), in batch order.
    pub skipped: Vec<String>,
}
