// src/extractors/fields.rs
use crate::config::ExtractionConfig;
use crate::extractors::contact::{self, PhoneMatcher};
use crate::extractors::record::{is_not_found_marker, FieldName, FieldRecord, FieldValue};
use crate::extractors::section::SectionExtractor;
use crate::extractors::vocabulary::{self, Vocabulary};
use crate::pdf::ResumeText;
use crate::utils::error::ConfigError;

/// Runs one independent recognizer per field over the resume text.
///
/// All patterns are compiled up front; `extract` only reads `self`, so the
/// same input always yields the same record.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    sections: SectionExtractor,
    phones: PhoneMatcher,
    skills: Vocabulary,
    languages: Vocabulary,
    name_skip_lines: Vec<String>,
}

impl FieldExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        let extractor = Self {
            sections: SectionExtractor::new(config)?,
            phones: PhoneMatcher::new(&config.phone_patterns)?,
            skills: Vocabulary::new(&config.skills_vocabulary)?,
            languages: Vocabulary::new(&config.languages_vocabulary)?,
            name_skip_lines: config.name_skip_lines.clone(),
        };
        tracing::debug!(
            "Field extractor ready: {} skill terms, {} language terms",
            extractor.skills.len(),
            extractor.languages.len()
        );
        Ok(extractor)
    }

    pub fn extract(&self, resume: &ResumeText) -> FieldRecord {
        let text = resume.text();
        let mut record = FieldRecord::new();

        for field in FieldName::ALL {
            let value = self.recognize(field, text);
            tracing::debug!("{}: {}", field, if value.is_found() { "found" } else { "not found" });
            record.set(field, value);
        }

        tracing::info!(
            "Recognized {} of {} fields",
            record.found_count(),
            FieldName::ALL.len()
        );
        record
    }

    /// Dispatches to the recognizer for one field.
    pub fn recognize(&self, field: FieldName, text: &str) -> FieldValue {
        match field {
            FieldName::Name => FieldValue::text_or_not_found(contact::find_name(
                text,
                &self.name_skip_lines,
                &self.sections,
                &self.phones,
            )),
            FieldName::Email => FieldValue::text_or_not_found(contact::find_email(text)),
            FieldName::Phone => FieldValue::text_or_not_found(self.phones.find(text)),
            FieldName::Skills => self.recognize_list(field, text, &self.skills),
            FieldName::Languages => self.recognize_list(field, text, &self.languages),
            FieldName::Education
            | FieldName::Experience
            | FieldName::Certifications
            | FieldName::Awards
            | FieldName::Projects => FieldValue::text_or_not_found(
                self.sections
                    .extract_section(text, field)
                    .map(|section| section.content)
                    .filter(|content| !is_not_found_marker(content)),
            ),
        }
    }

    /// Section items first, then vocabulary terms found anywhere, without duplicates.
    fn recognize_list(&self, field: FieldName, text: &str, terms: &Vocabulary) -> FieldValue {
        let mut items = self
            .sections
            .extract_section(text, field)
            .map(|section| vocabulary::split_items(&section.content))
            .unwrap_or_default();
        items.retain(|item| !is_not_found_marker(item));

        for term in terms.find_all(text) {
            vocabulary::push_distinct(&mut items, &term);
        }

        FieldValue::List(items)
    }
}
