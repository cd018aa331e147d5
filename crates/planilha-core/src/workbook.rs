use std::path::{Path, PathBuf};

use umya_spreadsheet::{HorizontalAlignmentValues, Spreadsheet, VerticalAlignmentValues};

use crate::error::ConversionError;
use crate::model::{ConsolidatedResult, MAX_SHEET_NAME_LEN};

/// Writer over a single workbook file with append semantics across runs.
///
/// Sheets accumulate in memory and nothing touches the target file until
/// `finalize`, so a fatal error mid-batch never loses sheets committed by
/// earlier runs.
pub struct WorkbookWriter {
    book: Spreadsheet,
    path: PathBuf,
}

impl WorkbookWriter {
    /// Open the workbook at `path`, creating an empty one on disk when no
    /// file exists there yet. An existing file keeps all of its sheets.
    pub fn open(path: &Path) -> Result<Self, ConversionError> {
        let book = if path.exists() {
            umya_spreadsheet::reader::xlsx::read(path)
                .map_err(|e| workbook_error(path, format!("failed to open: {e}")))?
        } else {
            let book = umya_spreadsheet::new_file();
            save_atomic(&book, path)?;
            book
        };
        Ok(WorkbookWriter {
            book,
            path: path.to_path_buf(),
        })
    }

    /// Write a consolidated result into the sheet named `sheet_name`.
    ///
    /// A sheet already carrying that exact name is replaced entirely, never
    /// merged. An empty result writes nothing; the document simply gets no
    /// sheet. Names longer than the sheet-name limit are truncated.
    pub fn write_sheet(
        &mut self,
        sheet_name: &str,
        result: &ConsolidatedResult,
    ) -> Result<(), ConversionError> {
        if result.is_empty() {
            return Ok(());
        }

        let name: String = sheet_name.chars().take(MAX_SHEET_NAME_LEN).collect();
        if self.book.get_sheet_by_name(&name).is_some() {
            self.book.remove_sheet_by_name(&name).map_err(|e| {
                workbook_error(&self.path, format!("failed to replace sheet '{name}': {e}"))
            })?;
        }

        let sheet = self.book.new_sheet(name.as_str()).map_err(|e| {
            workbook_error(&self.path, format!("failed to add sheet '{name}': {e}"))
        })?;

        for (r, row) in result.rows().iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                sheet
                    .get_cell_mut(((c + 1) as u32, (r + 1) as u32))
                    .set_value_string(value);
            }
        }

        Ok(())
    }

    /// Re-format every sheet currently in the workbook — sheets written by
    /// this batch and sheets surviving from prior runs alike — then persist
    /// the whole file in a single save.
    ///
    /// Formatting keeps cell text on one line, left-aligned and vertically
    /// centered, scaled down instead of overflowing into the next column.
    /// Only cells holding a non-empty value are touched.
    pub fn finalize(mut self) -> Result<(), ConversionError> {
        for sheet in self.book.get_sheet_collection_mut().iter_mut() {
            for cell in sheet.get_cell_collection_mut() {
                if cell.get_value().is_empty() {
                    continue;
                }
                let alignment = cell.get_style_mut().get_alignment_mut();
                alignment.set_horizontal(HorizontalAlignmentValues::Left);
                alignment.set_vertical(VerticalAlignmentValues::Center);
                alignment.set_wrap_text(false);
                alignment.set_shrink_to_fit(true);
            }
        }
        save_atomic(&self.book, &self.path)
    }
}

/// Write the workbook to a temp file in the target directory, then rename
/// it over the destination, so an interrupted save never corrupts a
/// previously committed file.
fn save_atomic(book: &Spreadsheet, path: &Path) -> Result<(), ConversionError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    umya_spreadsheet::writer::xlsx::write(book, tmp.path())
        .map_err(|e| workbook_error(path, format!("failed to write: {e}")))?;
    tmp.persist(path)
        .map_err(|e| workbook_error(path, format!("failed to save: {}", e.error)))?;
    Ok(())
}

fn workbook_error(path: &Path, reason: String) -> ConversionError {
    ConversionError::Workbook {
        path: path.to_path_buf(),
        reason,
    }
}
