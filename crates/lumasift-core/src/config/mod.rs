//! Run configuration for lumasift.
//!
//! There is no config file: the CLI assembles a [`Config`] from its
//! arguments and environment, then calls [`Config::validate`] before any file
//! is touched. Every section implements `Default`.

mod types;
mod validate;

pub use types::*;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned recursively for images
    pub source: PathBuf,

    /// Root of the mirrored output tree
    pub destination: PathBuf,

    /// Threshold and invert flag
    pub selection: SelectionConfig,

    /// Which files are candidates
    pub discovery: DiscoveryConfig,

    /// How selected files are copied
    pub copy: CopyConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Create a configuration for the given roots and threshold, with
    /// defaults everywhere else.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>, threshold: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            selection: SelectionConfig {
                threshold,
                ..SelectionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Expand a leading `~` in a user-supplied path.
    pub fn resolve_path(path: &str) -> PathBuf {
        let expanded = shellexpand::tilde(path);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty JSON string.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
