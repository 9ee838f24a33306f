//! Alpha blending of layers onto the output buffer.
//!
//! All drawing uses the Porter-Duff "over" operator on straight (not
//! premultiplied) RGBA8 pixels. Sources that extend past the target are
//! clipped, so any origin, including negative ones, is valid.

use super::position::PlacementPosition;
use image::{Rgba, RgbaImage};

/// Composite `source` over `target` with its top-left corner at `origin`.
///
/// Only the part of `source` that overlaps `target` is drawn.
pub fn blend_image(target: &mut RgbaImage, source: &RgbaImage, origin: PlacementPosition) {
    let target_width = target.width() as i64;
    let target_height = target.height() as i64;

    let x = origin.x as i64;
    let y = origin.y as i64;

    // Visible region, clamped to target bounds
    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = (x + source.width() as i64).min(target_width);
    let y_end = (y + source.height() as i64).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let src = *source.get_pixel((tx - x) as u32, (ty - y) as u32);
            let dst = target.get_pixel_mut(tx as u32, ty as u32);
            *dst = blend_pixels(*dst, src, 1.0);
        }
    }
}

/// Blend `color` scaled by `coverage` (0.0 to 1.0) into a single pixel.
///
/// Out-of-bounds coordinates are ignored. Used by glyph rasterizers.
pub fn blend_coverage(target: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= target.width() as i64 || y >= target.height() as i64 {
        return;
    }
    let dst = target.get_pixel_mut(x as u32, y as u32);
    *dst = blend_pixels(*dst, color, coverage);
}

/// Blend two pixels with the "over" operator.
///
/// `opacity` multiplies the foreground alpha before blending:
/// result = foreground + background * (1 - foreground.alpha)
pub fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let fg_alpha = (foreground[3] as f32 / 255.0) * opacity.clamp(0.0, 1.0);
    if fg_alpha <= 0.0 {
        return background;
    }
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);
    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
