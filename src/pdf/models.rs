// src/pdf/models.rs

/// Text pulled out of a resume PDF, kept per page.
///
/// Built once by the reader and never mutated afterwards. `text()` is the
/// whitespace-normalized flat view the recognizers work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    pages: Vec<String>,
    skipped_pages: Vec<u32>,
    text: String,
}

impl ResumeText {
    /// Builds from decoded pages, in document order.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self::with_skipped_pages(pages, Vec::new())
    }

    /// Builds from decoded pages plus the numbers of pages that failed to decode.
    pub fn with_skipped_pages(pages: Vec<String>, skipped_pages: Vec<u32>) -> Self {
        let text = normalize_whitespace(&pages.join("\n"));
        Self { pages, skipped_pages, text }
    }

    /// Single-page text, for callers that already have a text blob.
    pub fn from_text(text: &str) -> Self {
        Self::from_pages(vec![text.to_string()])
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Pages that decoded, not counting skipped ones.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn skipped_pages(&self) -> &[u32] {
        &self.skipped_pages
    }

    /// True when nothing but whitespace was extracted (e.g. a scanned PDF).
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Normalizes extracted text while keeping line structure.
///
/// Line endings become `\n`, non-breaking spaces become spaces, runs of
/// spaces/tabs collapse to one space, lines are trimmed, consecutive blank
/// lines collapse to one, and blank lines at either end are dropped.
pub fn normalize_whitespace(raw: &str) -> String {
    let unified = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{a0}', " ");

    let mut out = String::with_capacity(unified.len());
    let mut pending_blank = false;

    for line in unified.split('\n') {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            // Only remember the gap; it is emitted before the next real line.
            pending_blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        out.push_str(&collapsed);
        pending_blank = false;
    }

    out
}
