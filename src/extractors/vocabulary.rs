// src/extractors/vocabulary.rs
use crate::utils::error::ConfigError;
use regex::Regex;

// Anything that can't continue a term; '+' and '#' count as term chars for C++/C#
const NOT_TERM_CHAR: &str = r"[^\p{L}\p{N}_+#]";

// Separators between items inside a Skills/Languages section
const ITEM_SEPARATORS: &[char] = &[',', ';', '|', '\n', '•', '·', '▪', '●', '◦', '■'];

/// Known terms (skills, spoken languages) searched for anywhere in the text.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<(String, Regex)>,
}

impl Vocabulary {
    pub fn new(terms: &[String]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(terms.len());

        for term in terms.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            let pattern = format!(
                r"(?i)(?:^|{not})({term})(?:{not}|$)",
                not = NOT_TERM_CHAR,
                term = regex::escape(term)
            );
            let re = Regex::new(&pattern)
                .map_err(|source| ConfigError::InvalidPattern { pattern, source })?;
            compiled.push((term.to_string(), re));
        }

        Ok(Self { terms: compiled })
    }

    /// Terms present in the text, in order of first occurrence, spelled as in
    /// the vocabulary.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, &str)> = self
            .terms
            .iter()
            .filter_map(|(term, re)| {
                re.captures(text)
                    .and_then(|caps| caps.get(1))
                    .map(|m| (m.start(), term.as_str()))
            })
            .collect();
        hits.sort_by_key(|(pos, _)| *pos);

        let mut out = Vec::with_capacity(hits.len());
        for (_, term) in hits {
            push_distinct(&mut out, term);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Splits a list-style section ("Rust, Go; SQL" or bulleted lines) into items.
pub fn split_items(section: &str) -> Vec<String> {
    let mut out = Vec::new();
    for raw in section.split(ITEM_SEPARATORS) {
        let item = raw
            .trim()
            .trim_start_matches(|c: char| c == '-' || c == '*' || c.is_whitespace())
            .trim_end_matches('.')
            .trim();
        if !item.is_empty() {
            push_distinct(&mut out, item);
        }
    }
    out
}

/// Appends `item` unless an equal item (ignoring case) is already present.
pub fn push_distinct(items: &mut Vec<String>, item: &str) {
    let lowered = item.to_lowercase();
    if !items.iter().any(|existing| existing.to_lowercase() == lowered) {
        items.push(item.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[&str]) -> Vocabulary {
        Vocabulary::new(&terms.iter().map(|t| t.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_find_all_orders_by_first_occurrence() {
        let v = vocab(&["SQL", "Python", "Rust"]);
        let found = v.find_all("Built services in rust and python; some sql.");
        assert_eq!(found, vec!["Rust", "Python", "SQL"]);
    }

    #[test]
    fn test_find_all_respects_term_boundaries() {
        let v = vocab(&["Java", "Git", "C++", "C#"]);
        assert!(v.find_all("JavaScript and GitHub").is_empty());
        assert_eq!(v.find_all("C++/C# developer"), vec!["C++", "C#"]);
        assert_eq!(v.find_all("Java"), vec!["Java"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let v = vocab(&["", "  "]);
        assert!(v.is_empty());
        assert!(v.find_all("Python").is_empty());
    }

    #[test]
    fn test_split_items() {
        let section = "Rust, Go; SQL | Docker\n• Kubernetes\n- Terraform.\nrust";
        assert_eq!(
            split_items(section),
            vec!["Rust", "Go", "SQL", "Docker", "Kubernetes", "Terraform"]
        );
    }

    #[test]
    fn test_push_distinct_ignores_case() {
        let mut items = vec!["English".to_string()];
        push_distinct(&mut items, "english");
        push_distinct(&mut items, "French");
        assert_eq!(items, vec!["English", "French"]);
    }
}
