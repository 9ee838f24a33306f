//! Text overlays.
//!
//! Each [`TextSpec`] is drawn onto the output in list order, starting at its
//! anchor baseline and advancing left-to-right.
//!
//! # Example
//!
//! ```
//! use ogimage::{parse_hex_color, TextAlign, TextSpec};
//!
//! let title = TextSpec::new("1,232,232.12345678 BTC BURNED")
//!     .with_size(64.0)
//!     .with_color(parse_hex_color("#FFFFFF").unwrap())
//!     .at(20, 305)
//!     .with_align(TextAlign::Left);
//! assert_eq!(title.point.y, 305);
//! ```

use super::position::PlacementPosition;
use crate::error::{OgImageError, Result};
use crate::font::{FaceCache, FontSource};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Opaque black, used when a text entry has no color.
pub const DEFAULT_TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// How a text entry's anchor X relates to the drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    /// Anchor is the start of the baseline.
    #[default]
    Left,
    /// Anchor is the approximate center: X is shifted left by
    /// `byte_len(content) * size / 4`, regardless of the actual glyphs.
    CenterEstimated,
    /// Anchor is the center of the measured advance width.
    CenterMeasured,
}

/// One text overlay.
#[derive(Debug, Clone)]
pub struct TextSpec {
    pub content: String,
    pub font: FontSource,
    /// Font size in points (72 DPI, so pixels).
    pub size: f32,
    /// Defaults to opaque black.
    pub color: Option<Rgba<u8>>,
    /// Anchor point on the baseline.
    pub point: PlacementPosition,
    pub align: TextAlign,
}

impl TextSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: FontSource::Builtin,
            size: crate::constants::DEFAULT_FONT_SIZE,
            color: None,
            point: PlacementPosition::default(),
            align: TextAlign::Left,
        }
    }

    /// Use an outline font from memory.
    pub fn with_font_bytes(mut self, data: impl Into<Arc<[u8]>>) -> Self {
        self.font = FontSource::Bytes(data.into());
        self
    }

    /// Use an outline font file.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = FontSource::Path(path.into());
        self
    }

    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Rgba<u8>) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the anchor point.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.point = PlacementPosition::new(x, y);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Parse the font now and keep the face on the spec.
    ///
    /// A resolved spec can be reused across many renders without re-parsing.
    pub fn resolve(mut self) -> Result<Self> {
        if !self.font.is_resolved() {
            let face = self.font.resolve(self.size, None)?;
            self.font = FontSource::Resolved(face);
        }
        Ok(self)
    }
}

/// Draw a text entry onto `target`.
///
/// The font is resolved even for empty content, so a bad font always fails.
pub fn draw_text(
    target: &mut RgbaImage,
    text: &TextSpec,
    cache: Option<&FaceCache>,
) -> Result<()> {
    let face = text.font.resolve(text.size, cache)?;
    if text.content.is_empty() {
        return Ok(());
    }
    let color = text.color.unwrap_or(DEFAULT_TEXT_COLOR);

    let shift = match text.align {
        TextAlign::Left => 0,
        TextAlign::CenterEstimated => (text.content.len() as f32 * text.size / 4.0) as i32,
        TextAlign::CenterMeasured => (face.measure_width(&text.content) / 2.0).round() as i32,
    };
    let origin = PlacementPosition::new(text.point.x.saturating_sub(shift), text.point.y);

    tracing::debug!(
        x = origin.x,
        y = origin.y,
        size = text.size,
        chars = text.content.chars().count(),
        "Drawing text"
    );

    face.draw(target, origin, color, &text.content);
    Ok(())
}

/// Parse a hex color string into RGBA.
///
/// Supports #RGB, #RRGGBB and #RRGGBBAA. Colors without an alpha component
/// are opaque.
pub fn parse_hex_color(hex: &str) -> Result<Rgba<u8>> {
    let invalid = |msg: String| OgImageError::Config(format!("invalid color '{}': {}", hex, msg));

    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| invalid("color must start with '#'".to_string()))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("invalid hex digit".to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> u8 {
        // Digits are validated as ASCII hex above
        u8::from_str_radix(&digits[range], 16).unwrap_or(0)
    };

    match digits.len() {
        // Each digit is doubled: 0xF -> 0xFF, 0xA -> 0xAA
        3 => Ok(Rgba([
            channel(0..1) * 17,
            channel(1..2) * 17,
            channel(2..3) * 17,
            255,
        ])),
        6 => Ok(Rgba([channel(0..2), channel(2..4), channel(4..6), 255])),
        8 => Ok(Rgba([
            channel(0..2),
            channel(2..4),
            channel(4..6),
            channel(6..8),
        ])),
        n => Err(invalid(format!(
            "expected #RGB, #RRGGBB or #RRGGBBAA, got {} digits",
            n
        ))),
    }
}
