//! Font faces for text overlays.
//!
//! - **Outline faces** parse TrueType/OpenType bytes with `ab_glyph`; sizes
//!   are points at 72 DPI, so one point is one pixel.
//! - **The built-in face** is a fixed-width 8x8 bitmap font used whenever a
//!   text entry names no font. It needs no files.
//! - **[`FontSource`]** says where an entry's face comes from and resolves it.
//! - **[`FaceCache`]** optionally keeps parsed faces across renders.

pub mod bitmap;
pub mod cache;
pub mod face;
pub mod source;

pub use bitmap::BitmapFace;
pub use cache::FaceCache;
pub use face::{Face, OutlineFace};
pub use source::FontSource;

#[cfg(test)]
pub(crate) const TEST_FONT: &[u8] =
    include_bytes!("../../tests/fixtures/fonts/DejaVuSansMono.ttf");
