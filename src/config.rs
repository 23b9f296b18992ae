// src/config.rs
use crate::extractors::record::FieldName;
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "resume_parser.toml";

/// Editable data the recognizers run on.
///
/// Every key is optional in the TOML file. A key that is present replaces
/// the built-in list for that key; absent keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Headers that only end a section and belong to no field (Summary, References, ...).
    pub stop_headers: Vec<String>,
    pub skills_vocabulary: Vec<String>,
    pub languages_vocabulary: Vec<String>,
    /// Regexes for phone-number shapes; the earliest match in the text wins.
    pub phone_patterns: Vec<String>,
    /// Whole lines that are document titles rather than a name.
    pub name_skip_lines: Vec<String>,
    /// Header keywords per section-backed field (the `[sections]` table).
    pub sections: SectionHeaders,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeaders {
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub awards: Vec<String>,
    pub projects: Vec<String>,
    pub languages: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SectionHeaders {
    fn default() -> Self {
        Self {
            education: strings(&["education", "academic background", "academics", "qualifications"]),
            experience: strings(&[
                "work experience",
                "professional experience",
                "experience",
                "employment history",
                "employment",
                "work history",
            ]),
            skills: strings(&["technical skills", "skills", "core competencies"]),
            certifications: strings(&["certifications", "certification", "licenses"]),
            awards: strings(&["awards", "award", "honors", "honours", "achievements"]),
            projects: strings(&["projects", "personal projects", "academic projects"]),
            languages: strings(&["languages", "language skills"]),
        }
    }
}

impl SectionHeaders {
    /// Header keywords for a field, or `None` for fields not located by a section.
    pub fn for_field(&self, field: FieldName) -> Option<&[String]> {
        let headers = match field {
            FieldName::Education => &self.education,
            FieldName::Experience => &self.experience,
            FieldName::Skills => &self.skills,
            FieldName::Certifications => &self.certifications,
            FieldName::Awards => &self.awards,
            FieldName::Projects => &self.projects,
            FieldName::Languages => &self.languages,
            FieldName::Name | FieldName::Email | FieldName::Phone => return None,
        };
        Some(headers.as_slice())
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            stop_headers: strings(&[
                "summary",
                "professional summary",
                "objective",
                "career objective",
                "profile",
                "about me",
                "contact",
                "personal information",
                "interests",
                "hobbies",
                "publications",
                "volunteer experience",
                "references",
            ]),
            skills_vocabulary: strings(&[
                "Python",
                "Java",
                "JavaScript",
                "TypeScript",
                "Rust",
                "Golang",
                "C++",
                "C#",
                "SQL",
                "HTML",
                "CSS",
                "React",
                "Node.js",
                "Docker",
                "Kubernetes",
                "AWS",
                "Azure",
                "Git",
                "Linux",
                "Machine Learning",
                "Data Analysis",
                "TensorFlow",
                "PyTorch",
                "NLP",
                "Excel",
                "Tableau",
            ]),
            languages_vocabulary: strings(&[
                "English",
                "Spanish",
                "French",
                "German",
                "Italian",
                "Portuguese",
                "Russian",
                "Arabic",
                "Hindi",
                "Urdu",
                "Bengali",
                "Mandarin",
                "Cantonese",
                "Japanese",
                "Korean",
            ]),
            phone_patterns: strings(&[
                // International: +CC, optional area code in parens, 2-3 more digit groups
                r"\+\d{1,3}[ \t.-]?(?:\(\d{1,4}\)|\d{1,4})(?:[ \t.-]?\d{2,4}){2,3}",
                // North American 10 digits: (555) 123-4567, 555.123.4567, 5551234567
                r"\(?\b\d{3}\)?[ \t.-]?\d{3}[ \t.-]?\d{4}\b",
            ]),
            name_skip_lines: strings(&["resume", "résumé", "curriculum vitae", "cv"]),
            sections: SectionHeaders::default(),
        }
    }
}

impl ExtractionConfig {
    /// Resolves the config for this run.
    ///
    /// An explicit path must exist and parse. Otherwise `resume_parser.toml`
    /// in the working directory is used if present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            tracing::info!("Using config file: {}", local.display());
            return Self::from_path(&local);
        }

        tracing::debug!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every header that can end a section: all field headers plus the stop-only ones.
    pub fn all_headers(&self) -> Vec<String> {
        FieldName::ALL
            .iter()
            .filter_map(|field| self.sections.for_field(*field))
            .flatten()
            .chain(self.stop_headers.iter())
            .cloned()
            .collect()
    }
}
