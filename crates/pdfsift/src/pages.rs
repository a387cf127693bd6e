use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ExtractError;

/// A set of 1-based page numbers parsed from input like `"1,3-5"`.
///
/// Parsing only checks syntax. Whether the pages exist is decided by
/// [`PageSelection::resolve`] once the document's page count is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    pages: BTreeSet<usize>,
}

impl PageSelection {
    /// Resolve the selection against a document into sorted 0-based page indices.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Processing`] if a selected page is past the end
    /// of the document.
    pub fn resolve(&self, page_count: usize) -> Result<Vec<usize>, ExtractError> {
        if let Some(&last) = self.pages.last() {
            if last > page_count {
                return Err(ExtractError::Processing(format!(
                    "page {last} exceeds document page count ({page_count})"
                )));
            }
        }
        Ok(self.pages.iter().map(|page| page - 1).collect())
    }
}

/// Resolve an optional selection into 0-based page indices.
///
/// `None` selects every page of the document.
pub fn resolve_pages(
    selection: Option<&PageSelection>,
    page_count: usize,
) -> Result<Vec<usize>, ExtractError> {
    match selection {
        Some(selection) => {
            debug!(pages = %selection, page_count, "resolving page selection");
            selection.resolve(page_count)
        }
        None => Ok((0..page_count).collect()),
    }
}

fn parse_page(token: &str) -> Result<usize, String> {
    let page: usize = token
        .trim()
        .parse()
        .map_err(|_| format!("invalid page number: '{}'", token.trim()))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    Ok(page)
}

impl FromStr for PageSelection {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut pages = BTreeSet::new();

        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('-') {
                Some((start, end)) => {
                    let start = parse_page(start)?;
                    let end = parse_page(end)?;
                    if end < start {
                        return Err(format!("invalid page range '{part}': end before start"));
                    }
                    pages.extend(start..=end);
                }
                None => {
                    pages.insert(parse_page(part)?);
                }
            }
        }

        if pages.is_empty() {
            return Err("invalid page selection: no pages given".to_string());
        }

        Ok(Self { pages })
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages: Vec<String> = self.pages.iter().map(usize::to_string).collect();
        write!(f, "{}", pages.join(","))
    }
}
