// src/extractors/record.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Marker written wherever a field was not found.
pub const NOT_FOUND: &str = "N/A";

/// True for text that only says "N/A", which the recognizers treat as absent.
pub fn is_not_found_marker(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(NOT_FOUND)
}

/// The fields pulled out of a resume, in display/column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Education,
    Experience,
    Skills,
    Certifications,
    Awards,
    Projects,
    Languages,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Education,
        FieldName::Experience,
        FieldName::Skills,
        FieldName::Certifications,
        FieldName::Awards,
        FieldName::Projects,
        FieldName::Languages,
    ];

    /// Column / display label.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::Education => "Education",
            FieldName::Experience => "Experience",
            FieldName::Skills => "Skills",
            FieldName::Certifications => "Certifications",
            FieldName::Awards => "Awards",
            FieldName::Projects => "Projects",
            FieldName::Languages => "Languages",
        }
    }

    pub fn from_label(label: &str) -> Option<FieldName> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Skills and Languages hold a sequence; everything else a single string.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, FieldName::Skills | FieldName::Languages)
    }

    /// Value a field holds before any recognizer has run.
    pub fn empty_value(self) -> FieldValue {
        if self.is_multi_valued() {
            FieldValue::List(Vec::new())
        } else {
            FieldValue::NotFound
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    NotFound,
}

impl FieldValue {
    /// `Text` for a non-empty string, `NotFound` otherwise.
    pub fn text_or_not_found(value: Option<String>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => FieldValue::Text(s),
            _ => FieldValue::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        match self {
            FieldValue::Text(_) => true,
            FieldValue::List(items) => !items.is_empty(),
            FieldValue::NotFound => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::List(items) => items.serialize(serializer),
            FieldValue::NotFound => serializer.serialize_none(),
        }
    }
}

/// Extracted value for every field of one resume.
///
/// Backed by a fixed array indexed by [`FieldName`], so every field is
/// always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    values: [FieldValue; 10],
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self {
            values: FieldName::ALL.map(FieldName::empty_value),
        }
    }
}

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> &FieldValue {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FieldName, value: FieldValue) {
        self.values[field.index()] = value;
    }

    /// `(field, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        FieldName::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    /// Number of fields that produced a value.
    pub fn found_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_found()).count()
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}
