//! lumasift CLI - copy photos that meet a brightness threshold.
//!
//! Scans a source folder recursively, measures each image's mean luminance,
//! and copies the ones at or above the threshold (or below it, with
//! `--invert`) into the destination, preserving relative paths.
//!
//! # Usage
//!
//! ```bash
//! # Keep the bright shots
//! lumasift ./photos ./bright --threshold 100
//!
//! # Keep the dark ones instead, and write a per-file report
//! lumasift ./photos ./dark --threshold 100 --invert --report run.jsonl
//! ```

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

mod cli;
mod logging;

/// lumasift - copy photos that meet a brightness threshold.
#[derive(Parser, Debug)]
#[command(name = "lumasift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,

    #[command(flatten)]
    sift: cli::sift::SiftArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli).unwrap_or_else(|e| e.exit());
    logging::init_from_config(&config.logging);

    tracing::debug!("lumasift v{}", lumasift_core::VERSION);

    cli::sift::execute(config, &cli.sift)
}

/// Build the run configuration, reporting invalid values as usage errors.
fn resolve_config(cli: &Cli) -> Result<lumasift_core::Config, clap::Error> {
    cli::sift::build_config(&cli.sift, cli.verbose, cli.json_logs)
        .map_err(|e| Cli::command().error(ErrorKind::ValueValidation, e))
}
