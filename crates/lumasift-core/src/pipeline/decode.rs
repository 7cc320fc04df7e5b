//! Image decoding with format detection and orientation correction.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

use super::orientation::Orientation;

/// Decodes image files into upright pixel buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

/// Result of decoding an image.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded image data, already oriented
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Orientation that was applied
    pub orientation: Orientation,
    /// Image width in pixels, after orientation
    pub width: u32,
    /// Image height in pixels, after orientation
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }

    /// Read and decode an image file.
    ///
    /// The file is read in one go and its handle closed before decoding, so
    /// no descriptor outlives the call even when decoding fails.
    pub fn decode(&self, path: &Path) -> PipelineResult<DecodedImage> {
        let bytes = std::fs::read(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read file: {}", e),
        })?;
        Self::decode_bytes(bytes, path)
    }

    /// Decode an in-memory image. `path` is used for error context and as a
    /// format hint when content sniffing fails.
    pub fn decode_bytes(bytes: Vec<u8>, path: &Path) -> PipelineResult<DecodedImage> {
        if bytes.is_empty() {
            return Err(PipelineError::Decode {
                path: path.to_path_buf(),
                message: "File is empty".to_string(),
            });
        }

        let file_size = bytes.len() as u64;
        let orientation = Orientation::read(&bytes);

        let mut reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => {
                let hinted = ImageFormat::from_path(path).map_err(|e| PipelineError::Decode {
                    path: path.to_path_buf(),
                    message: format!("Unsupported format: {}", e),
                })?;
                reader.set_format(hinted);
                hinted
            }
        };
        let image = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let image = orientation.apply(image);
        if orientation != Orientation::Normal {
            tracing::trace!("Applied {:?} to {:?}", orientation, path);
        }

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            orientation,
            width,
            height,
            file_size,
        })
    }
}
