//! Page text extraction.

use std::path::Path;

use tracing::debug;

use crate::backend::{Backend, Document};
use crate::error::ExtractError;
use crate::pages::{PageSelection, resolve_pages};

/// Separator placed between page sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Header line that opens the section of a 1-based page number.
pub fn page_header(page_number: usize) -> String {
    format!("--- Page {page_number} ---")
}

/// Extract the text of a document as page sections.
///
/// Each page with text becomes `--- Page N ---\n<text>`; sections are joined
/// by a blank line. Pages without text are skipped entirely, so a document
/// with no text at all yields an empty string.
///
/// The document is dropped before this function returns, whether or not
/// extraction succeeded.
///
/// # Errors
///
/// Returns [`ExtractError::FileNotFound`] if `path` is missing and
/// [`ExtractError::Processing`] for any other failure. Nothing extracted
/// before a failure is returned.
pub fn extract_text<B: Backend>(
    backend: &B,
    path: &Path,
    pages: Option<&PageSelection>,
) -> Result<String, ExtractError> {
    let document = backend.open(path)?;
    let indices = resolve_pages(pages, document.page_count())?;

    let mut sections = Vec::with_capacity(indices.len());
    for index in indices {
        let page_number = index + 1;
        match document.page_text(index)? {
            Some(text) if !text.is_empty() => {
                sections.push(format!("{}\n{text}", page_header(page_number)));
            }
            _ => debug!(page = page_number, "no extractable text, skipping page"),
        }
    }

    debug!(sections = sections.len(), "text extraction finished");
    Ok(sections.join(SECTION_SEPARATOR))
}
