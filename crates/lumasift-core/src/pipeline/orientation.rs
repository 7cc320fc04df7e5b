//! EXIF orientation handling.
//!
//! Cameras store pixels in sensor order and record the intended rotation in
//! the EXIF `Orientation` tag (0x0112). Applying it makes the decoded pixels
//! match what a viewer would show.

use exif::{In, Reader, Tag};
use image::DynamicImage;
use std::io::Cursor;

/// The eight EXIF orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 1: stored as displayed
    #[default]
    Normal,
    /// 2: mirrored left-right
    FlipHorizontal,
    /// 3: upside down
    Rotate180,
    /// 4: mirrored top-bottom
    FlipVertical,
    /// 5: mirrored along the top-left/bottom-right diagonal
    Transpose,
    /// 6: needs a 90° clockwise turn
    Rotate90,
    /// 7: mirrored along the top-right/bottom-left diagonal
    Transverse,
    /// 8: needs a 90° counter-clockwise turn
    Rotate270,
}

impl Orientation {
    /// Map a raw EXIF tag value. Unknown values are treated as `Normal`.
    pub fn from_exif(value: u32) -> Self {
        match value {
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90,
            7 => Self::Transverse,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// Read the orientation from an encoded image's EXIF block.
    ///
    /// Returns `Normal` when there is no EXIF data or no orientation tag.
    pub fn read(bytes: &[u8]) -> Self {
        let mut cursor = Cursor::new(bytes);
        let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
            return Self::Normal;
        };

        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|f| f.value.get_uint(0))
            .map(Self::from_exif)
            .unwrap_or_default()
    }

    /// Transform the pixels so they appear upright.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => image,
            Self::FlipHorizontal => image.fliph(),
            Self::Rotate180 => image.rotate180(),
            Self::FlipVertical => image.flipv(),
            Self::Transpose => image.rotate90().fliph(),
            Self::Rotate90 => image.rotate90(),
            Self::Transverse => image.rotate270().fliph(),
            Self::Rotate270 => image.rotate270(),
        }
    }
}
