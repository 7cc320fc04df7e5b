//! CLI enum types for the sift command.

use clap::ValueEnum;
use lumasift_core::ReportFormat;

/// Supported report formats.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormatArg {
    /// Single JSON array, written at the end of the run
    Json,
    /// One JSON object per line, streamed during the run
    #[default]
    Jsonl,
}

impl std::fmt::Display for ReportFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormatArg::Json => write!(f, "json"),
            ReportFormatArg::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Jsonl => ReportFormat::JsonLines,
        }
    }
}
