mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use pdfsift::{ExtractError, OutputTarget, extract_file, write_output};
use tracing::debug;

fn run(cli: &Cli) -> Result<(), ExtractError> {
    let options = cli.extract_options();
    debug!(path = %cli.pdf_path.display(), mode = ?options.mode, "starting extraction");

    let rendered = extract_file(&cli.pdf_path, &options)?.render()?;
    let target = OutputTarget::from(cli.output.clone());
    write_output(&rendered, &target, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Both error kinds are reported on stdout, one line each.
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
