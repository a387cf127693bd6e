//! Extraction configuration.

use pdfplumber::{Strategy, TableSettings, TextOptions};

use crate::pages::PageSelection;

/// What to pull out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Page text joined into one string.
    #[default]
    Text,
    /// Table records serialized as JSON.
    Tables,
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStrategy {
    /// Visible ruling lines and rectangle edges.
    #[default]
    Lattice,
    /// Visible ruling lines only.
    LatticeStrict,
    /// Text alignment, no borders needed.
    Stream,
}

/// Tuning knobs for table detection. All tolerances are in PDF points.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub strategy: TableStrategy,
    pub snap_tolerance: f64,
    pub join_tolerance: f64,
    pub text_tolerance: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            strategy: TableStrategy::Lattice,
            snap_tolerance: 3.0,
            join_tolerance: 3.0,
            text_tolerance: 3.0,
        }
    }
}

impl TableOptions {
    /// Translate into the parsing library's table settings.
    pub fn to_settings(&self) -> TableSettings {
        let strategy = match self.strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::LatticeStrict => Strategy::LatticeStrict,
            TableStrategy::Stream => Strategy::Stream,
        };

        TableSettings {
            strategy,
            snap_tolerance: self.snap_tolerance,
            snap_x_tolerance: self.snap_tolerance,
            snap_y_tolerance: self.snap_tolerance,
            join_tolerance: self.join_tolerance,
            join_x_tolerance: self.join_tolerance,
            join_y_tolerance: self.join_tolerance,
            text_tolerance: self.text_tolerance,
            text_x_tolerance: self.text_tolerance,
            text_y_tolerance: self.text_tolerance,
            ..TableSettings::default()
        }
    }
}

/// Everything that shapes a single extraction run.
///
/// The default extracts text from every page with plain (non-layout) text
/// ordering and lattice table detection.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub mode: Mode,
    /// Pages to visit. `None` visits the whole document.
    pub pages: Option<PageSelection>,
    /// Use layout-aware text extraction (blocks and reading order).
    pub layout: bool,
    pub tables: TableOptions,
    /// Password for encrypted documents.
    pub password: Option<String>,
}

impl ExtractOptions {
    pub(crate) fn text_options(&self) -> TextOptions {
        TextOptions {
            layout: self.layout,
            ..TextOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_run() {
        let options = ExtractOptions::default();
        assert_eq!(options.mode, Mode::Text);
        assert!(options.pages.is_none());
        assert!(!options.layout);
        assert!(options.password.is_none());
        assert_eq!(options.tables.strategy, TableStrategy::Lattice);
    }

    #[test]
    fn default_table_options_match_library_defaults() {
        assert_eq!(
            TableOptions::default().to_settings(),
            TableSettings::default()
        );
    }

    #[test]
    fn tolerances_fan_out_to_both_axes() {
        let settings = TableOptions {
            strategy: TableStrategy::Stream,
            snap_tolerance: 5.0,
            join_tolerance: 4.0,
            text_tolerance: 2.0,
        }
        .to_settings();

        assert_eq!(settings.strategy, Strategy::Stream);
        assert_eq!(settings.snap_x_tolerance, 5.0);
        assert_eq!(settings.snap_y_tolerance, 5.0);
        assert_eq!(settings.join_x_tolerance, 4.0);
        assert_eq!(settings.join_y_tolerance, 4.0);
        assert_eq!(settings.text_x_tolerance, 2.0);
        assert_eq!(settings.text_y_tolerance, 2.0);
    }

    #[test]
    fn layout_flag_reaches_text_options() {
        let options = ExtractOptions {
            layout: true,
            ..ExtractOptions::default()
        };
        assert!(options.text_options().layout);
    }
}
