//! Shared fixtures for the compositor integration tests.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const RED: [u8; 4] = [255, 0, 0, 255];

/// DejaVu Sans Mono, 2048 units per em, every advance 1233 units
pub const MONO_FONT: &[u8] = include_bytes!("../fixtures/fonts/DejaVuSansMono.ttf");

/// Encode an RGBA image as PNG bytes.
pub fn png_bytes(img: RgbaImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

/// Encode an RGB image as JPEG bytes.
pub fn jpeg_bytes(img: RgbImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .unwrap();
    buffer.into_inner()
}

/// Solid white 600x315 template as PNG
pub fn template_600x315() -> Vec<u8> {
    png_bytes(RgbaImage::from_pixel(600, 315, Rgba(WHITE)))
}

/// Solid red logo as PNG
pub fn red_logo(width: u32, height: u32) -> Vec<u8> {
    png_bytes(RgbaImage::from_pixel(width, height, Rgba(RED)))
}

/// Gray JPEG template, for mixed-format inputs
pub fn gray_jpeg_template(width: u32, height: u32) -> Vec<u8> {
    jpeg_bytes(RgbImage::from_pixel(width, height, Rgb([128, 128, 128])))
}

/// Decode generated bytes back into RGBA for pixel checks.
pub fn decode_rgba(data: &[u8]) -> RgbaImage {
    image::load_from_memory(data).unwrap().to_rgba8()
}

/// Bounding box of pixels darker than mid-gray, as (min_x, min_y, max_x, max_y)
pub fn dark_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let dark: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] < 128 && p[1] < 128 && p[2] < 128)
        .map(|(x, y, _)| (x, y))
        .collect();
    Some((
        dark.iter().map(|p| p.0).min()?,
        dark.iter().map(|p| p.1).min()?,
        dark.iter().map(|p| p.0).max()?,
        dark.iter().map(|p| p.1).max()?,
    ))
}
