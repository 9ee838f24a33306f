// ogimage: Open Graph image compositor library

pub mod codec;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod font;
pub mod logging;

pub use codec::OutputFormat;
pub use compositor::position::{ImageDimensions, PlacementPosition};
pub use compositor::text::parse_hex_color;
pub use compositor::{Compositor, Config, LogoPosition, TextAlign, TextSpec};
pub use config::{LayoutFile, TextConfig};
pub use error::{ImageRole, OgImageError, Result};
pub use font::{Face, FaceCache, FontSource};
