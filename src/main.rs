/*!
 * Command-line interface for codebase-capture
 */

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use codebase_capture::config::{Args, Config};
use codebase_capture::error::Result;
use codebase_capture::logging;
use codebase_capture::writer::CaptureWriter;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing::subscriber::with_default(logging::subscriber(), || match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    })
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;

    info!("Starting codebase capture from {}", config.root_dir.display());
    info!("Output will be written to {}", config.output_file.display());

    let start_time = Instant::now();
    let stats = CaptureWriter::new(config).write()?;

    info!(
        files = stats.files_written,
        read_errors = stats.read_errors,
        skipped = stats.walk_errors,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Codebase capture completed successfully"
    );

    Ok(())
}
