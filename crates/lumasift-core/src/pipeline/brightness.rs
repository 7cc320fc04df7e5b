//! Mean-luminance brightness measurement.

use image::{DynamicImage, GrayImage};
use std::path::Path;

use crate::error::PipelineResult;

use super::decode::ImageDecoder;

/// Number of 8-bit intensity levels.
pub const LEVELS: usize = 256;

/// Count pixels at each intensity level.
pub fn luma_histogram(gray: &GrayImage) -> [u64; LEVELS] {
    let mut hist = [0u64; LEVELS];
    for &value in gray.as_raw() {
        hist[value as usize] += 1;
    }
    hist
}

/// Weighted mean of bin index by bin count; `0.0` for an empty histogram.
///
/// Sums are kept in integers, so the result equals the direct pixel average
/// up to the single final division.
pub fn histogram_mean(hist: &[u64; LEVELS]) -> f64 {
    let (weighted, count) = hist
        .iter()
        .enumerate()
        .fold((0u128, 0u128), |(weighted, count), (level, &n)| {
            (weighted + level as u128 * n as u128, count + n as u128)
        });
    if count == 0 {
        return 0.0;
    }
    weighted as f64 / count as f64
}

/// Mean luminance of an image on the 0..255 scale.
///
/// Color images are reduced with the library's Rec. 709 luma weights; alpha
/// is ignored.
pub fn mean_luminance(image: &DynamicImage) -> f64 {
    let gray = image.to_luma8();
    histogram_mean(&luma_histogram(&gray))
}

/// Decodes files and measures their brightness.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrightnessEvaluator {
    decoder: ImageDecoder,
}

impl BrightnessEvaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        Self {
            decoder: ImageDecoder::new(),
        }
    }

    /// Decode `path`, orient it, and return its mean luminance.
    pub fn evaluate(&self, path: &Path) -> PipelineResult<f64> {
        let decoded = self.decoder.decode(path)?;
        let brightness = mean_luminance(&decoded.image);
        tracing::trace!(
            "{:?}: {:?} {}x{} ({} bytes, {:?}) -> {:.2}",
            path,
            decoded.format,
            decoded.width,
            decoded.height,
            decoded.file_size,
            decoded.orientation,
            brightness
        );
        Ok(brightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_uniform_gray_equals_value() {
        for v in [0u8, 1, 50, 127, 200, 255] {
            let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(7, 5, Luma([v])));
            assert_eq!(mean_luminance(&img), v as f64);
        }
    }

    #[test]
    fn test_uniform_neutral_rgb_equals_value() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([200, 200, 200])));
        assert_eq!(mean_luminance(&img), 200.0);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, Rgba([90, 90, 90, 0])));
        assert_eq!(mean_luminance(&img), 90.0);
    }

    #[test]
    fn test_half_black_half_white() {
        let mut gray = GrayImage::new(2, 2);
        gray.put_pixel(0, 0, Luma([255]));
        gray.put_pixel(1, 1, Luma([255]));
        let img = DynamicImage::ImageLuma8(gray);
        assert_eq!(mean_luminance(&img), 127.5);
    }

    #[test]
    fn test_zero_pixels_is_zero() {
        let img = DynamicImage::new_luma8(0, 0);
        assert_eq!(mean_luminance(&img), 0.0);
        assert_eq!(histogram_mean(&[0; LEVELS]), 0.0);
    }

    #[test]
    fn test_histogram_matches_direct_average() {
        let gray = GrayImage::from_fn(37, 11, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
        let direct = gray.as_raw().iter().map(|&p| p as f64).sum::<f64>()
            / gray.as_raw().len() as f64;

        let hist = luma_histogram(&gray);
        assert_eq!(hist.iter().sum::<u64>(), 37 * 11);
        assert!((histogram_mean(&hist) - direct).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(16, 16, Luma([42]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let brightness = BrightnessEvaluator::new().evaluate(&path).unwrap();
        assert_eq!(brightness, 42.0);
    }

    #[test]
    fn test_evaluate_zero_byte_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"").unwrap();

        assert!(BrightnessEvaluator::new().evaluate(&path).is_err());
    }
}
