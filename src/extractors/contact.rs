// src/extractors/contact.rs
use crate::extractors::section::SectionExtractor;
use crate::utils::error::ConfigError;
use once_cell::sync::Lazy;
use regex::{Match, Regex};

// --- Regex Patterns (Lazy Static) ---
// local-part@domain, domain needs at least one dot and an alphabetic TLD
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
        .expect("Failed to compile EMAIL_RE")
});

// Shortest/longest plausible phone numbers, counted in digits
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// First email address in the text.
pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Finds phone numbers using a configurable list of shapes.
#[derive(Debug, Clone)]
pub struct PhoneMatcher {
    patterns: Vec<Regex>,
}

impl PhoneMatcher {
    pub fn new(patterns: &[String]) -> Result<Self, ConfigError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Earliest plausible phone number in the text, normalized.
    /// On a tie in position the longer match wins.
    pub fn find(&self, text: &str) -> Option<String> {
        self.find_match(text).map(|m| normalize_phone(m.as_str()))
    }

    pub fn contains_phone(&self, text: &str) -> bool {
        self.find_match(text).is_some()
    }

    fn find_match<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        let mut best: Option<Match<'t>> = None;

        for re in &self.patterns {
            // The first plausible hit is this pattern's earliest candidate
            let Some(candidate) = re.find_iter(text).find(|m| is_plausible_phone(m.as_str())) else {
                continue;
            };
            best = match best {
                Some(current)
                    if current.start() < candidate.start()
                        || (current.start() == candidate.start() && current.len() >= candidate.len()) =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            };
        }

        best
    }
}

fn is_plausible_phone(candidate: &str) -> bool {
    let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

/// Keeps a leading `+` and the digits, drops separators and parentheses.
pub fn normalize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    if raw.trim_start().starts_with('+') {
        out.push('+');
    }
    out.extend(raw.chars().filter(|c| c.is_ascii_digit()));
    out
}

/// Positional name heuristic: the first line that reads like a name.
///
/// Skips document-title lines ("Resume", "Curriculum Vitae"), section
/// headers, and lines carrying contact details.
pub fn find_name(
    text: &str,
    skip_lines: &[String],
    sections: &SectionExtractor,
    phones: &PhoneMatcher,
) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let lowered = line.to_lowercase();
            let is_title = skip_lines
                .iter()
                .any(|skip| skip.trim().to_lowercase() == lowered);
            !is_title
                && !sections.is_header_line(line)
                && !EMAIL_RE.is_match(line)
                && !phones.contains_phone(line)
        })
        .map(str::to_string)
}
