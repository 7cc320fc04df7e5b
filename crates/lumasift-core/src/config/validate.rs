//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

impl Config {
    /// Validate that the configuration describes a runnable job.
    ///
    /// The threshold is not range-checked: values outside 0..255 simply make
    /// the selection always-true or always-false. NaN is rejected because it
    /// compares false against everything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "source directory must be set".into(),
            ));
        }
        if self.destination.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "destination directory must be set".into(),
            ));
        }
        if self.source == self.destination {
            return Err(ConfigError::ValidationError(
                "source and destination must be different directories".into(),
            ));
        }
        if self.selection.threshold.is_nan() {
            return Err(ConfigError::ValidationError(
                "selection.threshold must be a number".into(),
            ));
        }
        if self.discovery.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "discovery.supported_formats must not be empty".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {}",
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
