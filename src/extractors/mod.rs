// src/extractors/mod.rs
pub mod contact;
pub mod fields;
pub mod record;
pub mod section;
pub mod vocabulary;

// Re-export key extraction types for convenience
pub use fields::FieldExtractor;
pub use record::{FieldName, FieldRecord, FieldValue, NOT_FOUND};
pub use section::{ExtractedSection, SectionExtractor};
