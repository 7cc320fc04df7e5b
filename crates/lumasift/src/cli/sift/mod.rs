//! The sift command: measure, select, and copy.

mod batch;
mod setup;
pub mod types;

pub use setup::build_config;
pub use types::ReportFormatArg;

use clap::Args;
use lumasift_core::Config;
use std::path::PathBuf;

use batch::process_batch;
use setup::setup_processor;

/// Arguments for a sift run.
#[derive(Args, Debug)]
pub struct SiftArgs {
    /// Source folder (scanned recursively)
    pub source: PathBuf,

    /// Destination folder (created if missing)
    pub destination: PathBuf,

    /// Brightness threshold (0..255)
    #[arg(long, env = "LUMASIFT_THRESHOLD", allow_negative_numbers = true)]
    pub threshold: f64,

    /// Invert selection (select darker images)
    #[arg(long)]
    pub invert: bool,

    /// Measure and report, but do not copy anything
    #[arg(long)]
    pub dry_run: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Write a per-file report (brightness, decision, target) to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "jsonl")]
    pub report_format: ReportFormatArg,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Manual Default impl for constructing SiftArgs outside of clap.
///
/// Values match the clap defaults above.
impl Default for SiftArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            destination: PathBuf::new(),
            threshold: 0.0,
            invert: false,
            dry_run: false,
            follow_links: false,
            report: None,
            report_format: ReportFormatArg::Jsonl,
            no_progress: false,
        }
    }
}

/// Execute a sift run with a validated configuration.
pub fn execute(config: Config, args: &SiftArgs) -> anyhow::Result<()> {
    let processor = setup_processor(&config)?;
    process_batch(&processor, args)
}
