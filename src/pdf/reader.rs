// src/pdf/reader.rs
use crate::pdf::models::ResumeText;
use crate::utils::error::PdfError;
use lopdf::Document;
use std::fs;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

// lopdf's stand-in for strings in fonts it can't decode (Identity-H)
const UNDECODED_TEXT: &str = "Unimplemented?";

/// Turns the path typed at the prompt into a filesystem path.
///
/// Trims surrounding whitespace and one pair of matching quotes, which
/// terminals add when a file is dragged onto them.
pub fn resolve_input_path(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted.trim())
}

/// Extracts the text of every page of the PDF at `path`, keeping line breaks.
///
/// Pages that fail to decode are skipped with a warning. The whole call
/// fails only when the file can't be read, the document can't be parsed,
/// it is encrypted, or not a single page decodes.
pub fn extract_resume_text(path: &Path) -> Result<ResumeText, PdfError> {
    tracing::info!("Extracting text from: {}", path.display());

    let metadata = fs::metadata(path).map_err(|source| PdfError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(PdfError::FileNotFound {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "path is not a regular file"),
        });
    }

    let bytes = fs::read(path).map_err(|source| PdfError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    extract_from_bytes(path, &bytes)
}

/// Decodes an in-memory PDF. `path` is only used for messages.
pub fn extract_from_bytes(path: &Path, bytes: &[u8]) -> Result<ResumeText, PdfError> {
    let document = Document::load_mem(bytes).map_err(|e| PdfError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if document.is_encrypted() {
        return Err(PdfError::Unreadable {
            path: path.to_path_buf(),
            reason: "document is encrypted".to_string(),
        });
    }

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    tracing::debug!("Document has {} pages", page_numbers.len());

    let mut pages = Vec::with_capacity(page_numbers.len());
    let mut skipped = Vec::new();

    for &page_number in &page_numbers {
        match page_text(&document, bytes, page_number, &page_numbers) {
            Ok(text) => pages.push(text),
            Err(reason) => {
                tracing::warn!("Skipping page {} of {}: {}", page_number, path.display(), reason);
                skipped.push(page_number);
            }
        }
    }

    if pages.is_empty() && !skipped.is_empty() {
        return Err(PdfError::Unreadable {
            path: path.to_path_buf(),
            reason: format!("none of the {} pages could be decoded", skipped.len()),
        });
    }

    let text = ResumeText::with_skipped_pages(pages, skipped);
    if text.is_blank() {
        tracing::warn!(
            "No extractable text in {} (scanned or image-only PDF?)",
            path.display()
        );
    }

    tracing::info!(
        "Extracted {} chars from {} pages ({} skipped)",
        text.text().len(),
        text.page_count(),
        text.skipped_pages().len()
    );
    Ok(text)
}

/// Text of one page, one output line per rendered text line.
///
/// lopdf decides whether the page content can be interpreted at all. The
/// text itself comes from pdf-extract, which follows line moves inside a
/// text object and reads ToUnicode maps. lopdf's own text is used when
/// pdf-extract gives up on the page, unless lopdf couldn't decode the font
/// either.
fn page_text(
    document: &Document,
    bytes: &[u8],
    page_number: u32,
    all_pages: &[u32],
) -> Result<String, String> {
    let plain = document
        .extract_text(&[page_number])
        .map_err(|e| e.to_string())?;

    match layout_text(document, bytes, page_number, all_pages) {
        Ok(text) => Ok(text),
        Err(reason) if plain.contains(UNDECODED_TEXT) => {
            Err(format!("unsupported font encoding ({})", reason))
        }
        Err(reason) => {
            tracing::debug!(
                "Page {}: layout extraction failed ({}), using plain text",
                page_number,
                reason
            );
            Ok(plain)
        }
    }
}

/// Runs pdf-extract on a copy of the document that holds only `page_number`.
fn layout_text(
    document: &Document,
    bytes: &[u8],
    page_number: u32,
    all_pages: &[u32],
) -> Result<String, String> {
    let single_page;
    let page_bytes = if all_pages.len() == 1 {
        bytes
    } else {
        let others: Vec<u32> = all_pages
            .iter()
            .copied()
            .filter(|n| *n != page_number)
            .collect();
        let mut copy = document.clone();
        copy.delete_pages(&others);

        let mut buffer = Vec::new();
        copy.save_to(&mut buffer).map_err(|e| e.to_string())?;
        single_page = buffer;
        single_page.as_slice()
    };

    // pdf-extract panics on some malformed fonts instead of returning an error
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(page_bytes)) {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err("text decoder panicked".to_string()),
    }
}
