//! Error types for the lumasift pipeline.
//!
//! Errors are organized by stage and carry the file paths involved, so a
//! failure message always says which file or directory was being handled.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for lumasift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source root does not exist
    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    /// The source root exists but is not a directory
    #[error("Source path is not a directory: {0}")]
    SourceNotADirectory(PathBuf),

    /// Source and destination resolve to the same directory
    #[error("Destination {destination} is the source directory {source_dir}")]
    DestinationIsSource {
        source_dir: PathBuf,
        destination: PathBuf,
    },

    /// Image decoding failed (corrupt file, unsupported codec, read error)
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Creating a destination directory failed
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying a selected file failed
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the run report failed
    #[error("Failed to write report {path}: {message}")]
    Report { path: PathBuf, message: String },
}

impl PipelineError {
    /// Whether the run can continue past this error.
    ///
    /// Only decode failures are skipped; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PipelineError::Decode { .. })
    }

    /// The bare failure description, without the path prefix.
    pub fn reason(&self) -> String {
        match self {
            PipelineError::Decode { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for lumasift results.
pub type Result<T> = std::result::Result<T, SiftError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_is_recoverable() {
        let err = PipelineError::Decode {
            path: PathBuf::from("bad.png"),
            message: "unexpected end of file".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.reason(), "unexpected end of file");
    }

    #[test]
    fn test_copy_is_fatal() {
        let err = PipelineError::Copy {
            from: PathBuf::from("src/a.jpg"),
            to: PathBuf::from("dst/a.jpg"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("src/a.jpg"));
        assert!(err.to_string().contains("dst/a.jpg"));
    }

    #[test]
    fn test_destination_is_source_is_fatal() {
        let err = PipelineError::DestinationIsSource {
            source_dir: PathBuf::from("/photos"),
            destination: PathBuf::from("/photos/sub/.."),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("/photos/sub/.."));
    }

    #[test]
    fn test_io_error_converts_to_sift_error() {
        let err: SiftError = std::io::Error::other("disk full").into();
        assert!(matches!(err, SiftError::Io(_)));
    }

    #[test]
    fn test_pipeline_error_converts_to_sift_error() {
        let err: SiftError = PipelineError::SourceNotFound(PathBuf::from("/nope")).into();
        assert!(err.to_string().contains("Source path not found"));
    }
}
