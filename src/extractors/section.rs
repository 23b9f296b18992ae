// src/extractors/section.rs

// --- Imports ---
use crate::config::ExtractionConfig;
use crate::extractors::record::FieldName;
use crate::utils::error::ConfigError;
use regex::Regex;

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    pub field: FieldName,
    pub header: String,  // The header as it appears in the text, e.g. "WORK EXPERIENCE:"
    pub content: String, // Trimmed text between this header and the next one
}

/// Builds a header regex from plain keywords.
///
/// A header is a line that starts (after optional blanks) with one of the
/// keywords, case-insensitively, followed by a colon or the end of the line.
/// Returns `None` for an empty keyword list.
pub fn header_regex(keywords: &[String]) -> Result<Option<Regex>, ConfigError> {
    let mut sorted: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if sorted.is_empty() {
        return Ok(None);
    }
    // Longest first so "work experience" wins over "work"
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();

    let alternatives = sorted
        .iter()
        .map(|k| {
            k.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[ \t]+")
        })
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(r"(?im)^[ \t]*(?:{})[ \t]*(?::|$)", alternatives);
    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| ConfigError::InvalidPattern { pattern, source })
}

// --- Main Extractor Structure ---
/// Locates keyword-delimited sections in normalized resume text.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    start_patterns: Vec<(FieldName, Regex)>,
    end_pattern: Option<Regex>, // Any recognized header, field or stop-only
}

impl SectionExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self, ConfigError> {
        let mut start_patterns = Vec::new();
        for field in FieldName::ALL {
            if let Some(keywords) = config.sections.for_field(field) {
                match header_regex(keywords)? {
                    Some(re) => start_patterns.push((field, re)),
                    None => tracing::warn!("No section headers configured for {}", field),
                }
            }
        }

        let end_pattern = header_regex(&config.all_headers())?;

        Ok(Self {
            start_patterns,
            end_pattern,
        })
    }

    /// Extracts the section belonging to `field`, if its header is present
    /// and something follows it.
    pub fn extract_section(&self, text: &str, field: FieldName) -> Option<ExtractedSection> {
        let start_re = self
            .start_patterns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, re)| re)?;

        let (header, start, end) = self.find_section_boundaries(text, start_re)?;
        let content = text[start..end].trim();

        if content.is_empty() {
            tracing::debug!("Section '{}' found for {} but it is empty", header, field);
            return None;
        }

        tracing::debug!("Extracted {} section ({} chars) after '{}'", field, content.len(), header);
        Some(ExtractedSection {
            field,
            header: header.to_string(),
            content: content.to_string(),
        })
    }

    /// True when the whole line reads as a section header of any kind.
    pub fn is_header_line(&self, line: &str) -> bool {
        self.end_pattern
            .as_ref()
            .map(|re| re.is_match(line.trim()))
            .unwrap_or(false)
    }

    /// Finds the first header matching `start_re`, then the next header of
    /// any kind after it. Returns the header text and the byte range of the
    /// section body.
    fn find_section_boundaries<'a>(
        &self,
        text: &'a str,
        start_re: &Regex,
    ) -> Option<(&'a str, usize, usize)> {
        let header = start_re.find(text)?;
        let start = header.end();

        let end = self
            .end_pattern
            .as_ref()
            .and_then(|re| re.find_at(text, start))
            .map(|m| m.start())
            .unwrap_or(text.len()); // No later header: section runs to the end

        Some((header.as_str().trim(), start, end))
    }
}
