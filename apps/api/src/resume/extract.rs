//! PDF text extraction — turns uploaded resume bytes into plain text.
//!
//! Extraction is strictly fail-soft: whatever goes wrong (corrupt file,
//! encrypted document, something that is not a PDF at all), the caller gets
//! an empty string and the pipeline degrades to a zeroed profile. No error
//! and no panic may cross this boundary.

use std::panic;

use tracing::debug;

/// Extracts text from PDF bytes, page by page in page order.
///
/// Pages that yield no extractable text are skipped entirely; the remaining
/// pages are joined with newline separators. Returns an empty string on any
/// extraction failure.
pub fn extract_text(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    // lopdf can panic on malformed xref tables, so the parser call is fenced
    // with catch_unwind in addition to its own Result.
    let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));

    match outcome {
        Ok(Ok(pages)) => join_pages(pages),
        Ok(Err(err)) => {
            debug!("PDF extraction failed: {err}");
            String::new()
        }
        Err(_) => {
            debug!("PDF extraction panicked on malformed input");
            String::new()
        }
    }
}

/// Joins per-page text with newlines, dropping pages with no visible text.
fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
