//! Capability interface over a PDF parsing library.
//!
//! Extraction only needs three things from a parser: open a document into an
//! ordered list of pages, pull a page's text (if any), and pull a page's
//! tables as cell grids. [`Backend`] and [`Document`] capture exactly that,
//! so [`crate::text`] and [`crate::tables`] never touch a concrete library.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pdfsift::{Backend, Document, PlumberBackend};
//!
//! # fn main() -> Result<(), pdfsift::ExtractError> {
//! let backend = PlumberBackend::default();
//! let document = backend.open(Path::new("report.pdf"))?;
//! for index in 0..document.page_count() {
//!     let text = document.page_text(index)?;
//!     let tables = document.page_tables(index)?;
//!     println!("page {}: text={} tables={}", index + 1, text.is_some(), tables.len());
//! }
//! // document is dropped here, releasing the parsed file
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use crate::error::ExtractError;

/// One detected table: rows of cells, `None` for an empty cell.
///
/// Rows may differ in length; the grid is kept exactly as the detector
/// reported it.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// Opens documents.
pub trait Backend {
    /// The opened document. Dropping it releases every resource it holds.
    type Document: Document;

    /// Open the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::FileNotFound`] if `path` does not resolve to a
    /// file, and [`ExtractError::Processing`] for any other failure.
    fn open(&self, path: &Path) -> Result<Self::Document, ExtractError>;
}

/// An opened document with pages addressed by 0-based index.
pub trait Document {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracted text of a page, or `None` if the page has no text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Processing`] if the page cannot be read.
    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractError>;

    /// Tables detected on a page, in detection order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Processing`] if the page cannot be read.
    fn page_tables(&self, index: usize) -> Result<Vec<TableGrid>, ExtractError>;
}
