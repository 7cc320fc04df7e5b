//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Extensions recognized as images (matched case-insensitively).
pub const DEFAULT_FORMATS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "tif", "tiff"];

/// Brightness selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Brightness cutoff on the 0..255 scale. Out-of-range values are allowed.
    pub threshold: f64,

    /// Select images *below* the threshold instead of at-or-above it
    pub invert: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            threshold: 128.0,
            invert: false,
        }
    }
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Supported input extensions, without the leading dot
    pub supported_formats: Vec<String>,

    /// Descend into symlinked directories
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            supported_formats: DEFAULT_FORMATS.iter().map(|s| s.to_string()).collect(),
            follow_links: false,
        }
    }
}

/// Copy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Evaluate and report, but never write to the destination
    pub dry_run: bool,

    /// Carry access/modification times over to the copy
    pub preserve_timestamps: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            preserve_timestamps: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
