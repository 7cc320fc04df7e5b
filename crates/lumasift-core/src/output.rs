//! Per-file run report in JSON or JSON Lines format.
//!
//! JSONL records are streamed as they are produced, so a report survives an
//! aborted run up to the last processed file. JSON output is a single array
//! written when the writer is finished.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::types::FileOutcome;

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One JSON array of records
    Json,
    /// One JSON object per line (newline-delimited JSON)
    JsonLines,
}

/// Writes one record per processed file.
pub struct ReportWriter<W: Write> {
    writer: W,
    format: ReportFormat,
    pending: Vec<FileOutcome>,
    records_written: usize,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (or truncate) a report file.
    pub fn create(path: &Path, format: ReportFormat) -> PipelineResult<Self> {
        let file = File::create(path).map_err(|e| PipelineError::Report {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::new(BufWriter::new(file), format))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Create a report writer over any sink.
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer,
            format,
            pending: Vec::new(),
            records_written: 0,
        }
    }

    /// Add one file's outcome to the report.
    pub fn record(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        match self.format {
            ReportFormat::Json => self.pending.push(outcome.clone()),
            ReportFormat::JsonLines => {
                serde_json::to_writer(&mut self.writer, outcome).map_err(io::Error::other)?;
                writeln!(self.writer)?;
            }
        }
        self.records_written += 1;
        Ok(())
    }

    /// Get the number of records added so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Write any buffered records, flush, and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.format == ReportFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, &self.pending)
                .map_err(io::Error::other)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}
