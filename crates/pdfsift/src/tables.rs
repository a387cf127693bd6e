//! Table extraction into page-tagged records.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::backend::{Backend, Document, TableGrid};
use crate::error::ExtractError;
use crate::pages::{PageSelection, resolve_pages};

/// A detected table tagged with where it was found.
///
/// `table_index` starts at 1 on every page, so a record is identified by the
/// `(page, table_index)` pair rather than by its index alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// 1-based page number.
    pub page: usize,
    /// 1-based position of the table within its page.
    pub table_index: usize,
    /// Rows of cells, `None` for empty cells.
    pub data: TableGrid,
}

/// Extract every table of a document, ordered by page and then by position
/// within the page.
///
/// # Errors
///
/// Returns [`ExtractError::FileNotFound`] if `path` is missing and
/// [`ExtractError::Processing`] for any other failure.
pub fn extract_tables<B: Backend>(
    backend: &B,
    path: &Path,
    pages: Option<&PageSelection>,
) -> Result<Vec<TableRecord>, ExtractError> {
    let document = backend.open(path)?;
    let indices = resolve_pages(pages, document.page_count())?;

    let mut records = Vec::new();
    for index in indices {
        let page = index + 1;
        let tables = document.page_tables(index)?;
        debug!(page, tables = tables.len(), "detected tables");

        records.extend(
            tables
                .into_iter()
                .enumerate()
                .map(|(i, data)| TableRecord {
                    page,
                    table_index: i + 1,
                    data,
                }),
        );
    }

    Ok(records)
}
