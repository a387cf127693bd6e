//! Extract page text and tables from PDF documents.
//!
//! `pdfsift` is a thin orchestration layer: PDF parsing, text ordering and
//! table detection are done by a [`Backend`] (by default [`PlumberBackend`],
//! built on the `pdfplumber` crate). This crate walks pages in order, tags
//! results with page numbers and renders them as plain text or JSON.
//!
//! # Modules
//!
//! - [`backend`] — The [`Backend`] / [`Document`] capability traits
//! - [`plumber`] — [`PlumberBackend`], backed by `pdfplumber`
//! - [`memory`] — [`MemoryBackend`], an in-memory document source
//! - [`text`] — Page-sectioned text extraction
//! - [`tables`] — [`TableRecord`] extraction
//! - [`output`] — Rendering and writing results
//! - [`options`] — [`ExtractOptions`] and table tuning
//! - [`pages`] — [`PageSelection`] parsing
//! - [`error`] — [`ExtractError`]
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pdfsift::{ExtractOptions, Mode, OutputTarget, extract_file, write_output};
//!
//! # fn main() -> Result<(), pdfsift::ExtractError> {
//! let options = ExtractOptions { mode: Mode::Tables, ..ExtractOptions::default() };
//! let extraction = extract_file(Path::new("report.pdf"), &options)?;
//! write_output(&extraction.render()?, &OutputTarget::Stdout, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod options;
pub mod output;
pub mod pages;
pub mod plumber;
pub mod tables;
pub mod text;

use std::path::Path;

pub use backend::{Backend, Document, TableGrid};
pub use error::ExtractError;
pub use memory::{MemoryBackend, MemoryDocument, MemoryPage};
pub use options::{ExtractOptions, Mode, TableOptions, TableStrategy};
pub use output::{Extraction, OutputTarget, write_output};
pub use pages::PageSelection;
pub use plumber::{PlumberBackend, PlumberDocument};
pub use tables::{TableRecord, extract_tables};
pub use text::extract_text;

/// Run the extraction selected by `options.mode` with any backend.
///
/// # Errors
///
/// See [`extract_text`] and [`extract_tables`].
pub fn extract_with<B: Backend>(
    backend: &B,
    path: &Path,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let pages = options.pages.as_ref();
    match options.mode {
        Mode::Text => extract_text(backend, path, pages).map(Extraction::Text),
        Mode::Tables => extract_tables(backend, path, pages).map(Extraction::Tables),
    }
}

/// Run the extraction selected by `options.mode` on a PDF file using
/// [`PlumberBackend`].
///
/// # Errors
///
/// See [`extract_text`] and [`extract_tables`].
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Extraction, ExtractError> {
    extract_with(&PlumberBackend::new(options), path, options)
}
