//! Open Graph card compositor.
//!
//! A [`Compositor`] holds one template and one logo image, fixed at
//! construction. Each generate call allocates a fresh output buffer and draws
//! three layers onto it in a fixed order:
//!
//! 1. the template, at its own bounds
//! 2. the logo, alpha-blended at the position computed from [`Config`]
//! 3. every text entry, in list order
//!
//! The buffer is then encoded to PNG or JPEG. The stored images are never
//! mutated, so one compositor can serve any number of calls, including
//! concurrent ones from several threads.
//!
//! # Example
//!
//! ```ignore
//! use ogimage::{Compositor, Config, LogoPosition, TextSpec};
//!
//! let compositor = Compositor::from_files("template.png", "logo.png")?;
//!
//! let config = Config {
//!     position: LogoPosition::BottomRight,
//!     padding: 20,
//!     texts: vec![TextSpec::new("Hello").with_font_path("menlo.ttf").with_size(64.0).at(20, 305)],
//!     ..Config::default()
//! };
//! compositor.generate_to_file(&config, "output.png")?;
//! ```

pub mod blend;
pub mod position;
pub mod text;

use crate::codec::{decode_image, read_image, EncoderFactory, EncoderQuality, OutputFormat};
use crate::constants::{DEFAULT_JPEG_QUALITY, DEFAULT_LINE_OFFSET};
use crate::error::{ImageRole, OgImageError, Result};
use crate::font::FaceCache;
use blend::blend_image;
use image::{DynamicImage, RgbaImage};
use position::{clamp_padding, is_visible, logo_origin, ImageDimensions, PlacementPosition};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use text::draw_text;

pub use position::LogoPosition;
pub use text::{TextAlign, TextSpec};

/// Options for one generate call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logo placement (default: top-left)
    pub position: LogoPosition,
    /// Distance between logo and template edges; negative values act as 0
    pub padding: i32,
    /// Text overlays, drawn in order
    pub texts: Vec<TextSpec>,
    /// Output encoding (default: PNG)
    pub format: OutputFormat,
    /// JPEG quality 1-100 (default: 75); ignored for PNG
    pub quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: LogoPosition::default(),
            padding: 0,
            texts: Vec::new(),
            format: OutputFormat::default(),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Composites a logo and text onto a template.
///
/// Cloning is cheap and shares the decoded images.
#[derive(Debug, Clone)]
pub struct Compositor {
    template: Arc<RgbaImage>,
    logo: Arc<RgbaImage>,
    face_cache: Option<FaceCache>,
}

impl Compositor {
    /// Decode template and logo from memory.
    ///
    /// PNG, JPEG and GIF inputs are accepted.
    pub fn new(template_data: &[u8], logo_data: &[u8]) -> Result<Self> {
        let template = decode_image(template_data, ImageRole::Template)?;
        let logo = decode_image(logo_data, ImageRole::Logo)?;
        Ok(Self::from_images(&template, &logo))
    }

    /// Read and decode template and logo from disk.
    pub fn from_files(
        template_path: impl AsRef<Path>,
        logo_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let template = read_image(template_path, ImageRole::Template)?;
        let logo = read_image(logo_path, ImageRole::Logo)?;
        Ok(Self::from_images(&template, &logo))
    }

    /// Wrap already-decoded images.
    pub fn from_images(template: &DynamicImage, logo: &DynamicImage) -> Self {
        Self {
            template: Arc::new(template.to_rgba8()),
            logo: Arc::new(logo.to_rgba8()),
            face_cache: None,
        }
    }

    /// Keep parsed font faces in `cache` across generate calls.
    pub fn with_face_cache(mut self, cache: FaceCache) -> Self {
        self.face_cache = Some(cache);
        self
    }

    pub fn template_dimensions(&self) -> ImageDimensions {
        ImageDimensions::of(&self.template)
    }

    pub fn logo_dimensions(&self) -> ImageDimensions {
        ImageDimensions::of(&self.logo)
    }

    /// Where the logo's top-left corner lands for `position` and `padding`.
    pub fn logo_origin(&self, position: LogoPosition, padding: i32) -> PlacementPosition {
        logo_origin(
            position,
            &self.template_dimensions(),
            &self.logo_dimensions(),
            clamp_padding(padding),
        )
    }

    /// Composite all layers without encoding.
    pub fn render(&self, config: &Config) -> Result<RgbaImage> {
        let mut output = (*self.template).clone();

        let origin = self.logo_origin(config.position, config.padding);
        if !is_visible(&origin, &self.template_dimensions(), &self.logo_dimensions()) {
            tracing::warn!(
                position = config.position.as_str(),
                padding = config.padding,
                x = origin.x,
                y = origin.y,
                "Logo lies entirely outside the template"
            );
        }
        blend_image(&mut output, &self.logo, origin);

        for (index, text) in config.texts.iter().enumerate() {
            draw_text(&mut output, text, self.face_cache.as_ref())
                .map_err(|e| e.in_text_entry(index))?;
        }

        Ok(output)
    }

    /// Render and encode to `config.format`.
    pub fn generate(&self, config: &Config) -> Result<Vec<u8>> {
        let output = self.render(config)?;

        let encoder = EncoderFactory::create(config.format);
        let encoded = encoder.encode(
            output.as_raw(),
            output.width(),
            output.height(),
            EncoderQuality::with_quality(config.quality),
        )?;

        tracing::info!(
            format = config.format.as_str(),
            width = output.width(),
            height = output.height(),
            texts = config.texts.len(),
            bytes = encoded.data.len(),
            "Generated image"
        );

        Ok(encoded.data)
    }

    /// Render, encode and write to `path`.
    ///
    /// Nothing is written if rendering or encoding fails, and a partially
    /// written file is removed if the write itself fails.
    pub fn generate_to_file(&self, config: &Config, path: impl AsRef<Path>) -> Result<()> {
        let data = self.generate(config)?;
        write_output(path.as_ref(), &data)
    }

    /// The config used by the default two-line layout.
    ///
    /// The title baseline sits 20px above the template's middle row and the
    /// subtitle 20px below it, both at X = padding. The logo goes bottom-right.
    pub fn default_config(&self, title: TextSpec, subtitle: TextSpec, padding: i32) -> Config {
        let padding = clamp_padding(padding) as i32;
        let middle = (self.template.height() / 2) as i32;

        let title = TextSpec {
            point: PlacementPosition::new(padding, middle - DEFAULT_LINE_OFFSET),
            ..title
        };
        let subtitle = TextSpec {
            point: PlacementPosition::new(padding, middle + DEFAULT_LINE_OFFSET),
            ..subtitle
        };

        Config {
            position: LogoPosition::BottomRight,
            padding,
            texts: vec![title, subtitle],
            ..Config::default()
        }
    }

    /// Generate a PNG with the default title/subtitle layout.
    pub fn generate_default(
        &self,
        title: TextSpec,
        subtitle: TextSpec,
        padding: i32,
    ) -> Result<Vec<u8>> {
        self.generate(&self.default_config(title, subtitle, padding))
    }

    /// Like [`Compositor::generate_default`], written to `path`.
    pub fn generate_default_to_file(
        &self,
        title: TextSpec,
        subtitle: TextSpec,
        padding: i32,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        self.generate_to_file(&self.default_config(title, subtitle, padding), path)
    }
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let context = || format!("Failed to write output {}", path.display());

    let mut file = std::fs::File::create(path).map_err(|e| OgImageError::io(context(), e))?;
    if let Err(e) = file.write_all(data).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(OgImageError::io(context(), e));
    }

    tracing::debug!(path = %path.display(), bytes = data.len(), "Wrote output file");
    Ok(())
}
