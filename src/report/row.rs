// src/report/row.rs
use crate::extractors::record::{FieldName, FieldRecord, FieldValue, NOT_FOUND};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;

pub const SOURCE_COLUMN: &str = "Source File";
pub const TIMESTAMP_COLUMN: &str = "Parsed At";

/// Joins list items inside a single cell.
pub const LIST_SEPARATOR: &str = ", ";

/// One spreadsheet row: ordered `(column, cell)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    cells: Vec<(String, String)>,
}

impl OutputRow {
    /// Standard header: the field labels, then the run metadata columns.
    pub fn columns() -> Vec<&'static str> {
        FieldName::ALL
            .iter()
            .map(|f| f.label())
            .chain([SOURCE_COLUMN, TIMESTAMP_COLUMN])
            .collect()
    }

    pub fn from_record(record: &FieldRecord, source: &Path, parsed_at: DateTime<Utc>) -> Self {
        let mut cells: Vec<(String, String)> = record
            .iter()
            .map(|(field, value)| (field.label().to_string(), encode_value(value)))
            .collect();
        cells.push((SOURCE_COLUMN.to_string(), source.display().to_string()));
        cells.push((
            TIMESTAMP_COLUMN.to_string(),
            parsed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
        Self { cells }
    }

    /// Row read back from a sheet, as `(header, cell)` pairs.
    pub fn from_cells(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell.as_str())
    }

    /// Rebuilds the field mapping. Columns that aren't fields are ignored;
    /// fields missing from the row keep their empty value.
    pub fn to_record(&self) -> FieldRecord {
        let mut record = FieldRecord::new();
        for (column, cell) in &self.cells {
            if let Some(field) = FieldName::from_label(column) {
                record.set(field, decode_value(field, cell));
            }
        }
        record
    }
}

/// Cell text for a value: `N/A` when not found, lists joined by `", "`,
/// an empty list as an empty cell.
pub fn encode_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::List(items) => items.join(LIST_SEPARATOR),
        FieldValue::NotFound => NOT_FOUND.to_string(),
    }
}

/// Inverse of [`encode_value`].
///
/// A cell reading `N/A` always decodes as absent. The recognizers never
/// report `N/A` as found text or as a list item, so records they produce
/// come back unchanged.
pub fn decode_value(field: FieldName, cell: &str) -> FieldValue {
    let cell = cell.trim();
    if field.is_multi_valued() {
        if cell.is_empty() || cell == NOT_FOUND {
            return FieldValue::List(Vec::new());
        }
        return FieldValue::List(
            cell.split(LIST_SEPARATOR.trim())
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        );
    }

    if cell.is_empty() || cell == NOT_FOUND {
        FieldValue::NotFound
    } else {
        FieldValue::Text(cell.to_string())
    }
}
