//! Logo placement on the template.
//!
//! Placement is closed-form: four corners offset by the padding, or the
//! center (padding ignored). All arithmetic is signed integer arithmetic that
//! truncates toward zero, so a logo larger than the template gets a negative
//! origin and is clipped when drawn.
//!
//! # Example
//!
//! ```
//! use ogimage::compositor::position::{logo_origin, ImageDimensions, PlacementPosition};
//! use ogimage::LogoPosition;
//!
//! let template = ImageDimensions::new(600, 315);
//! let logo = ImageDimensions::new(100, 100);
//!
//! let origin = logo_origin(LogoPosition::BottomRight, &template, &logo, 20);
//! assert_eq!(origin, PlacementPosition::new(480, 195)); // 600 - 100 - 20, 315 - 100 - 20
//! ```

use serde::{Deserialize, Serialize};

/// Where the logo is placed relative to the template's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl LogoPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::Center => "center",
        }
    }
}

/// Width and height of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &image::RgbaImage) -> Self {
        Self::new(image.width(), image.height())
    }
}

/// A pixel coordinate on the output. May lie outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Clamp a caller-supplied padding to a non-negative value.
pub fn clamp_padding(padding: i32) -> u32 {
    padding.max(0) as u32
}

/// Calculate the top-left origin of the logo.
///
/// `padding` must already be clamped (see [`clamp_padding`]). The center
/// position ignores it.
pub fn logo_origin(
    position: LogoPosition,
    template: &ImageDimensions,
    logo: &ImageDimensions,
    padding: u32,
) -> PlacementPosition {
    let t_w = template.width as i64;
    let t_h = template.height as i64;
    let l_w = logo.width as i64;
    let l_h = logo.height as i64;
    let p = padding as i64;

    let (x, y) = match position {
        LogoPosition::TopLeft => (p, p),
        LogoPosition::TopRight => (t_w - l_w - p, p),
        LogoPosition::BottomLeft => (p, t_h - l_h - p),
        LogoPosition::BottomRight => (t_w - l_w - p, t_h - l_h - p),
        LogoPosition::Center => ((t_w - l_w) / 2, (t_h - l_h) / 2),
    };

    PlacementPosition::new(saturate(x), saturate(y))
}

/// Check if an image at `pos` overlaps the target at all.
pub fn is_visible(
    pos: &PlacementPosition,
    target: &ImageDimensions,
    source: &ImageDimensions,
) -> bool {
    let right = pos.x as i64 + source.width as i64;
    let bottom = pos.y as i64 + source.height as i64;

    (pos.x as i64) < target.width as i64
        && (pos.y as i64) < target.height as i64
        && right > 0
        && bottom > 0
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
