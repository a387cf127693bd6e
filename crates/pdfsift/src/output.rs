//! Serializing extraction results and writing them out.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExtractError;
use crate::tables::TableRecord;

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Text(String),
    Tables(Vec<TableRecord>),
}

impl Extraction {
    /// Serialize for output.
    ///
    /// Text is returned unchanged. Tables become a JSON array pretty-printed
    /// with a 2-space indent; no tables at all renders as `[]`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Processing`] if JSON serialization fails.
    pub fn render(&self) -> Result<String, ExtractError> {
        match self {
            Extraction::Text(text) => Ok(text.clone()),
            Extraction::Tables(records) => Ok(serde_json::to_string_pretty(records)?),
        }
    }
}

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

/// Write `content` to `target`.
///
/// For [`OutputTarget::Stdout`] the content is written to `console` followed
/// by a newline. For [`OutputTarget::File`] the file is created or truncated
/// and receives exactly `content`, and `console` gets a single confirmation
/// line naming the file.
///
/// # Errors
///
/// Returns [`ExtractError::Processing`] if the file or console write fails.
pub fn write_output<W: Write>(
    content: &str,
    target: &OutputTarget,
    console: &mut W,
) -> Result<(), ExtractError> {
    match target {
        OutputTarget::Stdout => {
            writeln!(console, "{content}")?;
        }
        OutputTarget::File(path) => {
            write_file(path, content)?;
            writeln!(console, "Output written to {}", path.display())?;
        }
    }
    console.flush()?;
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ExtractError> {
    std::fs::write(path, content.as_bytes())?;
    info!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}
