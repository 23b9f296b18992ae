// src/report/console.rs
use crate::extractors::record::{FieldName, FieldRecord, FieldValue, NOT_FOUND};
use std::fmt::{self, Write};

// Width of the "Label:" column for one-line fields
const LABEL_WIDTH: usize = 15;

/// Human-readable rendering of a record for the terminal.
///
/// Name, Email and Phone are printed as aligned `Label: value` lines; the
/// other fields follow as blocks, with lists printed one item per line.
pub fn render_record(record: &FieldRecord) -> String {
    let mut out = String::new();
    if render(&mut out, record).is_err() {
        tracing::warn!("Incomplete console rendering");
    }
    out
}

fn render(out: &mut impl Write, record: &FieldRecord) -> fmt::Result {
    writeln!(out, "\nResume Information:\n")?;

    for field in [FieldName::Name, FieldName::Email, FieldName::Phone] {
        let label = format!("{}:", field.label());
        let value = match record.get(field) {
            FieldValue::Text(s) => s.as_str(),
            _ => NOT_FOUND,
        };
        writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH)?;
    }

    for (field, value) in record.iter() {
        if matches!(field, FieldName::Name | FieldName::Email | FieldName::Phone) {
            continue;
        }
        writeln!(out, "\n{}:", field.label())?;
        match value {
            FieldValue::Text(s) => writeln!(out, "{}", s)?,
            FieldValue::List(items) if !items.is_empty() => {
                for item in items {
                    writeln!(out, "  - {}", item)?;
                }
            }
            FieldValue::List(_) | FieldValue::NotFound => writeln!(out, "{}", NOT_FOUND)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_record() {
        let mut record = FieldRecord::new();
        record.set(FieldName::Name, FieldValue::Text("Jane Doe".into()));
        record.set(FieldName::Education, FieldValue::Text("BA Computer Science, 2020".into()));
        record.set(FieldName::Skills, FieldValue::List(vec!["Rust".into(), "SQL".into()]));

        let rendered = render_record(&record);
        assert!(rendered.starts_with("\nResume Information:\n\n"));
        assert!(rendered.contains("Name:          Jane Doe\n"));
        assert!(rendered.contains("Email:         N/A\n"));
        assert!(rendered.contains("\nEducation:\nBA Computer Science, 2020\n"));
        assert!(rendered.contains("\nSkills:\n  - Rust\n  - SQL\n"));
        assert!(rendered.contains("\nLanguages:\nN/A\n"));
        // Contact fields are not repeated as blocks
        assert_eq!(rendered.matches("Name:").count(), 1);
    }
}
