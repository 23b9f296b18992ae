// src/report/spreadsheet.rs
use crate::report::row::OutputRow;
use crate::utils::error::StorageError;
use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "resume_data.xlsx";
pub const SHEET_NAME: &str = "Resumes";

// Excel refuses longer strings in a single cell
const MAX_CELL_CHARS: usize = 32_767;

/// Appends one row per run to an XLSX file.
///
/// XLSX can't be appended in place, so an existing sheet is read back and
/// the workbook is rewritten with the new row last.
pub struct SpreadsheetWriter {
    path: PathBuf,
}

impl SpreadsheetWriter {
    /// Creates a writer for `path`. Nothing is touched until `append`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `row`, creating the file with a header row if needed.
    pub fn append(&self, row: &OutputRow) -> Result<PathBuf, StorageError> {
        let (mut header, mut rows) = self.read_sheet()?.unwrap_or_default();

        if header.is_empty() {
            tracing::info!("Creating new spreadsheet: {}", self.path.display());
            header = OutputRow::columns().into_iter().map(String::from).collect();
        } else {
            tracing::debug!(
                "Appending to {} ({} existing rows)",
                self.path.display(),
                rows.len()
            );
        }

        // Columns the existing file doesn't have yet go on the end
        for (column, _) in row.cells() {
            if !header.iter().any(|h| h == column) {
                tracing::warn!("Adding missing column '{}' to {}", column, self.path.display());
                header.push(column.clone());
            }
        }

        let new_row = header
            .iter()
            .map(|h| row.get(h).unwrap_or_default().to_string())
            .collect();
        rows.push(new_row);

        self.write_workbook(&header, &rows)?;
        tracing::info!("Saved row {} to {}", rows.len(), self.path.display());

        Ok(self.path.clone())
    }

    /// Reads every data row back; an absent file has no rows.
    pub fn read_rows(&self) -> Result<Vec<OutputRow>, StorageError> {
        let Some((header, rows)) = self.read_sheet()? else {
            return Ok(Vec::new());
        };

        Ok(rows
            .into_iter()
            .map(|cells| {
                OutputRow::from_cells(
                    header
                        .iter()
                        .cloned()
                        .zip(cells.into_iter().chain(std::iter::repeat(String::new())))
                        .collect(),
                )
            })
            .collect())
    }

    /// Header and data rows of the first worksheet, or `None` if the file
    /// doesn't exist.
    fn read_sheet(&self) -> Result<Option<(Vec<String>, Vec<Vec<String>>)>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut workbook: Xlsx<BufReader<File>> = open_workbook(&self.path).map_err(|e: calamine::XlsxError| StorageError::Workbook {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let range = match workbook.worksheet_range_at(0) {
            Some(Ok(range)) => range,
            Some(Err(e)) => {
                return Err(StorageError::Workbook {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
            None => return Ok(Some((Vec::new(), Vec::new()))), // No sheets at all
        };

        let mut rows = range
            .rows()
            .map(|cells| cells.iter().map(|c| c.to_string()).collect::<Vec<String>>());

        let header: Vec<String> = rows
            .next()
            .map(|cells| {
                let mut header = cells;
                // Trailing blank header cells come from the used range, not from columns
                while header.last().is_some_and(|h| h.is_empty()) {
                    header.pop();
                }
                header
            })
            .unwrap_or_default();

        Ok(Some((header, rows.collect())))
    }

    /// Writes the whole workbook to a sibling temp file, then renames it
    /// over the target so a failed write leaves the old file intact.
    fn write_workbook(&self, header: &[String], rows: &[Vec<String>]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = Format::new().set_bold();
        for (col, name) in header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, name.as_str(), &header_format)?;
        }

        for (row_idx, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                worksheet.write_string(row_idx as u32 + 1, col as u16, truncate_cell(cell))?;
            }
        }
        worksheet.set_freeze_panes(1, 0)?;

        let tmp_path = self.temp_path();
        if let Err(e) = workbook.save(&tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        fs::rename(&tmp_path, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

fn truncate_cell(cell: &str) -> &str {
    match cell.char_indices().nth(MAX_CELL_CHARS) {
        Some((byte_idx, _)) => {
            tracing::warn!("Truncating cell of {} chars to {}", cell.chars().count(), MAX_CELL_CHARS);
            &cell[..byte_idx]
        }
        None => cell,
    }
}
