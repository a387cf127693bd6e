//! Error type for document extraction.
//!
//! Extraction failures fall into exactly two kinds: the input document is
//! missing, or anything else went wrong while opening, parsing, extracting,
//! serializing or writing. [`ExtractError`]'s `Display` output is the line
//! reported to the user.

use std::io;
use std::path::{Path, PathBuf};

use pdfplumber::PdfError;
use thiserror::Error;

/// Error returned by every extraction and output operation.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not resolve to a file.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other failure. Carries the underlying message verbatim.
    #[error("Error processing PDF: {0}")]
    Processing(String),
}

impl ExtractError {
    /// Build a [`ExtractError::Processing`] from any displayable failure.
    pub fn processing(err: impl std::fmt::Display) -> Self {
        ExtractError::Processing(err.to_string())
    }

    /// Classify an I/O failure that happened while reading the input document.
    ///
    /// A missing file becomes [`ExtractError::FileNotFound`]; everything else
    /// (permissions, directories, ...) is a processing error.
    pub fn from_input_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ExtractError::FileNotFound(path.to_path_buf()),
            _ => ExtractError::processing(err),
        }
    }

    /// Returns `true` for the missing-input variant.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, ExtractError::FileNotFound(_))
    }
}

impl From<PdfError> for ExtractError {
    fn from(err: PdfError) -> Self {
        ExtractError::processing(err)
    }
}

impl From<io::Error> for ExtractError {
    fn from(err: io::Error) -> Self {
        ExtractError::processing(err)
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::processing(err)
    }
}
