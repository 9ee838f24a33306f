//! Built-in fixed-width bitmap face.
//!
//! Glyphs come from the 8x8 `font8x8` tables and are magnified by an
//! integer factor derived from the requested size. Rows 0-6 sit above the
//! baseline and row 7 is the descender row.

use crate::compositor::blend::blend_coverage;
use crate::compositor::position::PlacementPosition;
use crate::constants::{BITMAP_GLYPH_SIZE, BITMAP_REPLACEMENT_CHAR};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};

/// Rows of a glyph cell drawn above the baseline
const ROWS_ABOVE_BASELINE: i64 = 7;

/// The built-in face at a fixed magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
}

impl BitmapFace {
    /// Face whose cell height best approximates `size` pixels.
    pub fn new(size: f32) -> Self {
        let scale = if size.is_finite() {
            (size / BITMAP_GLYPH_SIZE as f32).round().max(1.0) as u32
        } else {
            1
        };
        Self { scale }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Horizontal advance of every glyph in pixels.
    pub fn advance(&self) -> u64 {
        BITMAP_GLYPH_SIZE as u64 * self.scale as u64
    }

    pub fn measure_width(&self, text: &str) -> f32 {
        (text.chars().count() as u64).saturating_mul(self.advance()) as f32
    }

    pub fn draw(
        &self,
        target: &mut RgbaImage,
        origin: PlacementPosition,
        color: Rgba<u8>,
        text: &str,
    ) {
        let (width, height) = (target.width() as i64, target.height() as i64);
        let scale = self.scale as i64;
        let advance = self.advance() as i64;
        let top = origin.y as i64 - ROWS_ABOVE_BASELINE * scale;
        let mut cursor_x = origin.x as i64;

        for c in text.chars() {
            if cursor_x >= width {
                break;
            }
            if cursor_x + advance > 0 {
                let rows = glyph_rows(c);
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..BITMAP_GLYPH_SIZE as i64 {
                        // Bit 0 is the leftmost pixel
                        if bits & (1 << col) == 0 {
                            continue;
                        }
                        // Magnified cell, clipped to the target
                        let px = cursor_x + col * scale;
                        let py = top + row as i64 * scale;
                        let (x0, x1) = (px.max(0), (px + scale).min(width));
                        let (y0, y1) = (py.max(0), (py + scale).min(height));
                        for y in y0..y1 {
                            for x in x0..x1 {
                                blend_coverage(target, x, y, color, 1.0);
                            }
                        }
                    }
                }
            }
            cursor_x = cursor_x.saturating_add(advance);
        }
    }
}

fn glyph_rows(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get(BITMAP_REPLACEMENT_CHAR))
        .unwrap_or([0; 8])
}
