//! Core data types passed between pipeline stages.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An image file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Full path to the file
    pub path: PathBuf,
    /// Path relative to the source root; mirrored under the destination
    pub relative: PathBuf,
}

/// What happened to a single candidate.
///
/// This is also the record type written to the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Full path to the source file
    pub path: PathBuf,

    /// Path relative to the source root
    pub relative_path: PathBuf,

    /// Mean luminance (0..255); absent when the file could not be decoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,

    /// Whether the file passed the threshold
    pub selected: bool,

    /// Where the file was (or, in a dry run, would be) copied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied_to: Option<PathBuf>,

    /// Decode failure description for skipped files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    /// Outcome for a file that was measured.
    pub fn measured(candidate: &Candidate, brightness: f64, selected: bool) -> Self {
        Self {
            path: candidate.path.clone(),
            relative_path: candidate.relative.clone(),
            brightness: Some(brightness),
            selected,
            copied_to: None,
            error: None,
        }
    }

    /// Outcome for a file that could not be decoded.
    pub fn skipped(candidate: &Candidate, error: impl Into<String>) -> Self {
        Self {
            path: candidate.path.clone(),
            relative_path: candidate.relative.clone(),
            brightness: None,
            selected: false,
            copied_to: None,
            error: Some(error.into()),
        }
    }

    /// True if the file was skipped because it could not be decoded.
    pub fn is_skipped(&self) -> bool {
        self.error.is_some()
    }
}

/// Counters accumulated over one run.
///
/// `selected` and `skipped` never exceed `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Candidates examined
    pub total: u64,
    /// Candidates that passed the threshold
    pub selected: u64,
    /// Candidates that failed to decode
    pub skipped: u64,
}

impl RunStats {
    /// Count one candidate's outcome.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;
        if outcome.is_skipped() {
            self.skipped += 1;
        } else if outcome.selected {
            self.selected += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> Candidate {
        Candidate {
            path: PathBuf::from("/src").join(name),
            relative: PathBuf::from(name),
        }
    }

    #[test]
    fn test_run_stats_record() {
        let mut stats = RunStats::default();
        stats.record(&FileOutcome::measured(&candidate("a.jpg"), 200.0, true));
        stats.record(&FileOutcome::measured(&candidate("b.jpg"), 50.0, false));
        stats.record(&FileOutcome::skipped(&candidate("c.png"), "truncated"));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.selected, 1);
        assert_eq!(stats.skipped, 1);
        assert!(stats.selected <= stats.total);
    }

    #[test]
    fn test_skipped_outcome_is_never_selected() {
        let outcome = FileOutcome::skipped(&candidate("bad.png"), "empty file");
        assert!(outcome.is_skipped());
        assert!(!outcome.selected);
        assert!(outcome.brightness.is_none());
    }

    #[test]
    fn test_outcome_serde_skips_empty_fields() {
        let outcome = FileOutcome::measured(&candidate("a/b.jpg"), 120.5, false);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"relative_path\":\"a/b.jpg\""));
        assert!(json.contains("\"brightness\":120.5"));
        assert!(!json.contains("copied_to"));
        assert!(!json.contains("error"));

        let parsed: FileOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.brightness, Some(120.5));
    }
}
