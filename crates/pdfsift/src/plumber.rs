//! [`Backend`] implementation over the `pdfplumber` crate.

use std::path::Path;

use pdfplumber::{Pdf, TableSettings, TextOptions};
use tracing::{debug, info};

use crate::backend::{Backend, Document, TableGrid};
use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// Opens documents with `pdfplumber` using the text and table settings of an
/// [`ExtractOptions`].
#[derive(Debug, Clone)]
pub struct PlumberBackend {
    text_options: TextOptions,
    table_settings: TableSettings,
    password: Option<String>,
}

impl PlumberBackend {
    pub fn new(options: &ExtractOptions) -> Self {
        Self {
            text_options: options.text_options(),
            table_settings: options.tables.to_settings(),
            password: options.password.clone(),
        }
    }
}

impl Default for PlumberBackend {
    fn default() -> Self {
        Self::new(&ExtractOptions::default())
    }
}

impl Backend for PlumberBackend {
    type Document = PlumberDocument;

    fn open(&self, path: &Path) -> Result<PlumberDocument, ExtractError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractError::from_input_io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read document");

        let pdf = match self.password.as_deref() {
            Some(password) => Pdf::open_with_password(&bytes, password.as_bytes(), None)?,
            None => Pdf::open(&bytes, None)?,
        };
        info!(path = %path.display(), pages = pdf.page_count(), "opened document");

        Ok(PlumberDocument {
            pdf,
            text_options: self.text_options.clone(),
            table_settings: self.table_settings.clone(),
        })
    }
}

/// A document opened by [`PlumberBackend`].
pub struct PlumberDocument {
    pdf: Pdf,
    text_options: TextOptions,
    table_settings: TableSettings,
}

impl Document for PlumberDocument {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractError> {
        let page = self.pdf.page(index)?;
        let text = page.extract_text(&self.text_options);
        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    fn page_tables(&self, index: usize) -> Result<Vec<TableGrid>, ExtractError> {
        let page = self.pdf.page(index)?;
        Ok(page.extract_tables(&self.table_settings))
    }
}
