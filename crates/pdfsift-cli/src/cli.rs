use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pdfsift::{ExtractOptions, Mode, PageSelection, TableOptions, TableStrategy};

/// Extract text or tables from a PDF document.
#[derive(Debug, Parser)]
#[command(name = "pdfsift", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "PDF_PATH")]
    pub pdf_path: PathBuf,

    /// Extract tables as JSON instead of text
    #[arg(long)]
    pub tables: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<PageSelection>,

    /// Use layout-preserving text extraction
    #[arg(long)]
    pub layout: bool,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Lattice)]
    pub strategy: StrategyArg,

    /// Snap tolerance for aligning nearby edges
    #[arg(long, default_value_t = 3.0)]
    pub snap_tolerance: f64,

    /// Join tolerance for merging collinear edges
    #[arg(long, default_value_t = 3.0)]
    pub join_tolerance: f64,

    /// Text tolerance for assigning text to cells
    #[arg(long, default_value_t = 3.0)]
    pub text_tolerance: f64,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Table detection strategy choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Ruling lines and rectangle edges
    Lattice,
    /// Ruling lines only
    LatticeStrict,
    /// Text alignment, no borders needed
    Stream,
}

impl From<StrategyArg> for TableStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lattice => TableStrategy::Lattice,
            StrategyArg::LatticeStrict => TableStrategy::LatticeStrict,
            StrategyArg::Stream => TableStrategy::Stream,
        }
    }
}

impl Cli {
    /// Fold the parsed flags into library options.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            mode: if self.tables { Mode::Tables } else { Mode::Text },
            pages: self.pages.clone(),
            layout: self.layout,
            tables: TableOptions {
                strategy: self.strategy.into(),
                snap_tolerance: self.snap_tolerance,
                join_tolerance: self.join_tolerance,
                text_tolerance: self.text_tolerance,
            },
            password: self.password.clone(),
        }
    }
}
