// Constants module - centralized default values
//
// Layout and codec defaults shared by the compositor, the font faces and
// the layout file parser.

// =============================================================================
// Text defaults
// =============================================================================

/// Resolution used when converting a point size to pixels
pub const FONT_DPI: f32 = 72.0;

/// Default font size in points for layout-file texts
pub const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Pixel height of one glyph cell in the built-in bitmap face
pub const BITMAP_GLYPH_SIZE: u32 = 8;

/// Glyph drawn by the built-in face for characters it does not cover
pub const BITMAP_REPLACEMENT_CHAR: char = '?';

// =============================================================================
// Default layout
// =============================================================================

/// Vertical distance between the template's middle row and each default text line
pub const DEFAULT_LINE_OFFSET: i32 = 20;

// =============================================================================
// Encoder defaults
// =============================================================================

/// Default JPEG quality (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

// =============================================================================
// Face cache defaults
// =============================================================================

/// Maximum number of parsed faces kept by a face cache
pub const DEFAULT_FACE_CACHE_CAPACITY: u64 = 64;
