//! In-memory [`Backend`] for embedding pre-extracted content and for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::backend::{Backend, Document, TableGrid};
use crate::error::ExtractError;

/// One page of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPage {
    pub text: Option<String>,
    pub tables: Vec<TableGrid>,
    /// When set, reading this page fails with this message.
    pub failure: Option<String>,
}

impl MemoryPage {
    /// A page with text and no tables.
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// A page with neither text nor tables.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A page with tables and no text.
    pub fn tables(tables: Vec<TableGrid>) -> Self {
        Self {
            tables,
            ..Self::default()
        }
    }

    /// A page that cannot be read.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// An ordered list of pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    pub pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    pub fn new(pages: Vec<MemoryPage>) -> Self {
        Self { pages }
    }

    fn page(&self, index: usize) -> Result<&MemoryPage, ExtractError> {
        let page = self.pages.get(index).ok_or_else(|| {
            ExtractError::Processing(format!("page index {index} out of range"))
        })?;
        match &page.failure {
            Some(message) => Err(ExtractError::Processing(message.clone())),
            None => Ok(page),
        }
    }
}

impl Document for MemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>, ExtractError> {
        Ok(self.page(index)?.text.clone())
    }

    fn page_tables(&self, index: usize) -> Result<Vec<TableGrid>, ExtractError> {
        Ok(self.page(index)?.tables.clone())
    }
}

/// Serves [`MemoryDocument`]s registered under paths. Unknown paths are
/// reported as missing files.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    documents: HashMap<PathBuf, MemoryDocument>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `document` under `path`, replacing any previous one.
    pub fn with_document(mut self, path: impl Into<PathBuf>, document: MemoryDocument) -> Self {
        self.documents.insert(path.into(), document);
        self
    }
}

impl Backend for MemoryBackend {
    type Document = MemoryDocument;

    fn open(&self, path: &Path) -> Result<MemoryDocument, ExtractError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ExtractError::FileNotFound(path.to_path_buf()))
    }
}
