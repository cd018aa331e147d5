use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("no PDF documents selected")]
    EmptySelection,

    #[error("too many documents selected: {count} (maximum is {max})")]
    TooManyDocuments { count: usize, max: usize },

    #[error("table detection failed: {0}")]
    Detection(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("workbook error at {path}: {reason}")]
    Workbook { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
