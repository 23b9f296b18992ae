// src/lib.rs
//! Pulls contact details and resume sections out of a PDF and appends them
//! to a spreadsheet.
//!
//! The pipeline is linear: [`pdf::extract_resume_text`] produces a
//! [`pdf::ResumeText`], [`extractors::FieldExtractor`] turns it into a
//! [`extractors::FieldRecord`], and the [`report`] module prints it and
//! appends an [`report::OutputRow`] to the XLSX file.

pub mod config;
pub mod extractors;
pub mod pdf;
pub mod report;
pub mod utils;

pub use config::ExtractionConfig;
pub use utils::AppError;
