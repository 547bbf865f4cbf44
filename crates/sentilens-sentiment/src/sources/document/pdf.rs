//! PDF text extraction, page by page.

use std::path::Path;

use super::DocumentError;

/// Concatenate the text of every page in page order, joined by single spaces.
///
/// A page whose text cannot be extracted (typically scanned or image-only)
/// contributes an empty string; only a file that cannot be loaded as a PDF
/// at all is an error.
pub(super) fn extract_pdf_text(path: &Path) -> Result<String, DocumentError> {
    let document = lopdf::Document::load(path)?;
    Ok(pages_text(&document))
}

pub(super) fn pages_text(document: &lopdf::Document) -> String {
    let pages: Vec<String> = document
        .get_pages()
        .into_keys()
        .map(|page_number| {
            document
                .extract_text(&[page_number])
                .unwrap_or_else(|e| {
                    tracing::debug!(page = page_number, error = %e, "PDF page has no extractable text");
                    String::new()
                })
                .trim()
                .to_string()
        })
        .collect();
    pages.join(" ")
}
