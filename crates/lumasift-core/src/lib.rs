//! lumasift core - brightness-based image selection.
//!
//! Walks a source tree for images, measures each one's mean luminance, and
//! copies those that meet a threshold into a mirrored destination tree.
//!
//! # Architecture
//!
//! A single sequential pass with no state beyond the run counters:
//!
//! ```text
//! Discover → Decode + Orient → Luma histogram mean → Select → Copy
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use lumasift_core::{Config, ImageProcessor};
//!
//! fn main() -> lumasift_core::Result<()> {
//!     let config = Config::new("./photos", "./bright", 100.0);
//!     config.validate()?;
//!
//!     let stats = ImageProcessor::new(&config).run(|outcome| {
//!         if let Some(err) = &outcome.error {
//!             eprintln!("skipped {:?}: {}", outcome.path, err);
//!         }
//!         Ok(())
//!     })?;
//!     println!("Copied {} of {} files", stats.selected, stats.total);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, PipelineError, PipelineResult, Result, SiftError};
pub use output::{ReportFormat, ReportWriter};
pub use pipeline::{BrightnessEvaluator, ImageProcessor};
pub use types::{Candidate, FileOutcome, RunStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
