//! Input image decoding
//!
//! The supported source formats are fixed, so detection is a direct match
//! on magic bytes rather than a codec registry.

use crate::error::{ImageRole, OgImageError, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF87A_SIGNATURE: &[u8] = b"GIF87a";
const GIF89A_SIGNATURE: &[u8] = b"GIF89a";

/// Image formats accepted as template or logo input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
    Gif,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Gif => ImageFormat::Gif,
        }
    }
}

/// Detect the source format from the leading bytes of `data`.
pub fn sniff_format(data: &[u8]) -> Option<SourceFormat> {
    if data.starts_with(PNG_SIGNATURE) {
        Some(SourceFormat::Png)
    } else if data.starts_with(JPEG_SIGNATURE) {
        Some(SourceFormat::Jpeg)
    } else if data.starts_with(GIF87A_SIGNATURE) || data.starts_with(GIF89A_SIGNATURE) {
        Some(SourceFormat::Gif)
    } else {
        None
    }
}

/// Decode image bytes into a `DynamicImage`.
///
/// `role` is only used to label errors.
pub fn decode_image(data: &[u8], role: ImageRole) -> Result<DynamicImage> {
    let format = sniff_format(data).ok_or_else(|| {
        OgImageError::decode_failed(role, "unsupported or unrecognized image format")
    })?;

    let image = image::load_from_memory_with_format(data, format.image_format())
        .map_err(|e| OgImageError::decode_failed(role, e.to_string()))?;

    tracing::debug!(
        role = %role,
        format = format.as_str(),
        width = image.width(),
        height = image.height(),
        "Decoded input image"
    );

    Ok(image)
}

/// Read and decode an image file.
pub fn read_image(path: impl AsRef<Path>, role: ImageRole) -> Result<DynamicImage> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| {
        OgImageError::io(
            format!("Failed to read {} image {}", role, path.display()),
            e,
        )
    })?;
    decode_image(&data, role)
}
