// src/report/mod.rs
pub mod console;
pub mod row;
pub mod spreadsheet;

pub use console::render_record;
pub use row::OutputRow;
pub use spreadsheet::{SpreadsheetWriter, DEFAULT_OUTPUT_FILE};
