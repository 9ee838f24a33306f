//! Size-specific font faces.
//!
//! A [`Face`] is what actually measures and draws text. It is either an
//! outline font parsed with `ab_glyph`, or the built-in bitmap face. Faces
//! are cheap to clone and safe to share between threads.

use super::bitmap::BitmapFace;
use crate::compositor::blend::blend_coverage;
use crate::compositor::position::PlacementPosition;
use crate::constants::FONT_DPI;
use crate::error::{OgImageError, Result};
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::fmt;

/// An outline font at a fixed pixel scale.
#[derive(Clone)]
pub struct OutlineFace {
    font: FontArc,
    scale: PxScale,
}

impl fmt::Debug for OutlineFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFace")
            .field("glyphs", &self.font.glyph_count())
            .field("scale", &self.scale)
            .finish()
    }
}

impl OutlineFace {
    /// Parse font bytes and size the face for `size` points at 72 DPI.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        check_size(size)?;

        let font = FontArc::try_from_vec(data)
            .map_err(|e| OgImageError::font_failed("font data", e.to_string()))?;

        // ab_glyph scales by ascent - descent; point sizes scale the em square
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| OgImageError::font_failed("font data", "missing units per em"))?;
        let px_per_em = size * FONT_DPI / 72.0;
        let scale = PxScale::from(px_per_em * font.height_unscaled() / units_per_em);

        Ok(Self { font, scale })
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }

    pub fn measure_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev: Option<GlyphId> = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }

        width
    }

    pub fn draw(
        &self,
        target: &mut RgbaImage,
        origin: PlacementPosition,
        color: Rgba<u8>,
        text: &str,
    ) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline_y = origin.y as f32;
        let mut cursor_x = origin.x as f32;
        let mut prev: Option<GlyphId> = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                cursor_x += scaled.kern(prev, id);
            }

            let glyph = id.with_scale_and_position(self.scale, point(cursor_x, baseline_y));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = px as i64 + bounds.min.x as i64;
                    let y = py as i64 + bounds.min.y as i64;
                    blend_coverage(target, x, y, color, coverage);
                });
            }

            cursor_x += scaled.h_advance(id);
            prev = Some(id);
        }
    }
}

/// A font rendering handle for one size.
#[derive(Debug, Clone)]
pub enum Face {
    Outline(OutlineFace),
    Bitmap(BitmapFace),
}

impl Face {
    /// Parse an outline font at `size` points.
    pub fn from_bytes(data: impl Into<Vec<u8>>, size: f32) -> Result<Self> {
        OutlineFace::from_bytes(data.into(), size).map(Face::Outline)
    }

    /// The built-in fixed-width face at roughly `size` pixels.
    pub fn builtin(size: f32) -> Self {
        Face::Bitmap(BitmapFace::new(size))
    }

    /// Advance width of `text` in pixels.
    pub fn measure_width(&self, text: &str) -> f32 {
        match self {
            Face::Outline(face) => face.measure_width(text),
            Face::Bitmap(face) => face.measure_width(text),
        }
    }

    /// Draw `text` left-to-right with its baseline starting at `origin`.
    pub fn draw(
        &self,
        target: &mut RgbaImage,
        origin: PlacementPosition,
        color: Rgba<u8>,
        text: &str,
    ) {
        match self {
            Face::Outline(face) => face.draw(target, origin, color, text),
            Face::Bitmap(face) => face.draw(target, origin, color, text),
        }
    }
}

fn check_size(size: f32) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        return Err(OgImageError::font_failed(
            "font size",
            format!("size must be a positive number, got {}", size),
        ));
    }
    Ok(())
}
