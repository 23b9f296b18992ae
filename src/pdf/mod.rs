// src/pdf/mod.rs
pub mod models;
pub mod reader;

pub use models::ResumeText;
pub use reader::{extract_resume_text, resolve_input_path};
