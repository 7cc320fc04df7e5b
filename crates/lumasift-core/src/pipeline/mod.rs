//! Brightness selection pipeline components.
//!
//! - **discovery**: Find image files under the source root
//! - **decode**: Load and decode images, with format sniffing
//! - **orientation**: Apply EXIF rotation/flip to decoded pixels
//! - **brightness**: Histogram-based mean luminance
//! - **select**: Threshold decision
//! - **copy**: Mirror selected files into the destination tree
//! - **processor**: Orchestrates the full pipeline

pub mod brightness;
pub mod copy;
pub mod decode;
pub mod discovery;
pub mod orientation;
pub mod processor;
pub mod select;

// Re-exports for convenient access
pub use brightness::{histogram_mean, luma_histogram, mean_luminance, BrightnessEvaluator};
pub use copy::Copier;
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::FileDiscovery;
pub use orientation::Orientation;
pub use processor::ImageProcessor;
pub use select::{select, Selector};
