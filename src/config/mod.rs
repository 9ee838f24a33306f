// Layout file module
//
// A layout file describes one complete render job in YAML: the input
// images, the output path and format, the logo placement and the texts.
//
//   template: template.png
//   logo: logo.png
//   output: output.png
//   position: bottom-right
//   padding: 20
//   texts:
//     - content: "${AMOUNT} BTC BURNED"
//       font: menlo.ttf
//       size: 64
//       color: "#FFFFFF"
//       x: 20
//       y: 305
//
// Relative paths resolve against the directory of the layout file.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::codec::OutputFormat;
use crate::compositor::position::PlacementPosition;
use crate::compositor::text::parse_hex_color;
use crate::compositor::{Compositor, Config, LogoPosition, TextAlign, TextSpec};
use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_JPEG_QUALITY};
use crate::error::{OgImageError, Result};
use crate::font::{FaceCache, FontSource};

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

/// One text entry of a layout file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    pub content: String,

    /// Outline font file; the built-in face is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,

    /// Font size in points (default: 24)
    #[serde(default = "default_font_size")]
    pub size: f32,

    /// Hex color: #RGB, #RRGGBB or #RRGGBBAA (default: opaque black)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Anchor X (default: 0)
    #[serde(default)]
    pub x: i32,

    /// Anchor baseline Y (default: 0)
    #[serde(default)]
    pub y: i32,

    #[serde(default)]
    pub align: TextAlign,
}

/// A render job loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub template: PathBuf,
    pub logo: PathBuf,
    pub output: PathBuf,

    /// Output format; inferred from the output extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// JPEG quality 1-100 (default: 75)
    #[serde(default = "default_quality")]
    pub quality: u8,

    #[serde(default)]
    pub position: LogoPosition,

    /// Negative values act as 0
    #[serde(default)]
    pub padding: i32,

    #[serde(default)]
    pub texts: Vec<TextConfig>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl LayoutFile {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| OgImageError::Config(e.to_string()))
    }

    /// Parse YAML after replacing `${VAR_NAME}` with environment values.
    ///
    /// Fails if any referenced variable is unset.
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self> {
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| OgImageError::Config(e.to_string()))?;

        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                OgImageError::Config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Self::from_yaml(&substituted)
    }

    /// Load a layout file; relative paths resolve against its directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            OgImageError::io(format!("Failed to read layout file {}", path.display()), e)
        })?;

        let mut layout = Self::from_yaml_with_env(&yaml)?;
        layout.base_dir = path.parent().map(Path::to_path_buf);
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("template", &self.template),
            ("logo", &self.logo),
            ("output", &self.output),
        ] {
            if path.as_os_str().is_empty() {
                return Err(OgImageError::Config(format!("{} path cannot be empty", name)));
            }
        }

        self.output_format()?;

        if !(1..=100).contains(&self.quality) {
            return Err(OgImageError::Config(format!(
                "quality must be between 1 and 100, got {}",
                self.quality
            )));
        }

        for (index, text) in self.texts.iter().enumerate() {
            if !text.size.is_finite() || text.size <= 0.0 {
                return Err(OgImageError::Config(format!(
                    "text {}: size must be a positive number, got {}",
                    index, text.size
                )));
            }
            if let Some(color) = &text.color {
                parse_hex_color(color).map_err(|e| match e {
                    OgImageError::Config(msg) => {
                        OgImageError::Config(format!("text {}: {}", index, msg))
                    }
                    other => other,
                })?;
            }
            if matches!(&text.font, Some(font) if font.as_os_str().is_empty()) {
                return Err(OgImageError::Config(format!(
                    "text {}: font path cannot be empty",
                    index
                )));
            }
        }

        Ok(())
    }

    /// The explicit format, or the one implied by the output extension.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_path(&self.output).ok_or_else(|| {
                OgImageError::Config(format!(
                    "cannot infer output format from '{}'; set `format`",
                    self.output.display()
                ))
            }),
        }
    }

    /// Resolve a path from the file against the layout file's directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Build the runtime config. Validates first.
    pub fn to_config(&self) -> Result<Config> {
        self.validate()?;

        let mut texts = Vec::with_capacity(self.texts.len());
        for text in &self.texts {
            let font = match &text.font {
                Some(path) => FontSource::Path(self.resolve_path(path)),
                None => FontSource::Builtin,
            };
            let color = text.color.as_deref().map(parse_hex_color).transpose()?;

            texts.push(TextSpec {
                content: text.content.clone(),
                font,
                size: text.size,
                color,
                point: PlacementPosition::new(text.x, text.y),
                align: text.align,
            });
        }

        Ok(Config {
            position: self.position,
            padding: self.padding,
            texts,
            format: self.output_format()?,
            quality: self.quality,
        })
    }

    /// Load the inputs, render, and write the output file.
    pub fn render(&self) -> Result<()> {
        let config = self.to_config()?;
        let output = self.resolve_path(&self.output);

        // Layouts often reuse one font for several lines
        let compositor = Compositor::from_files(
            self.resolve_path(&self.template),
            self.resolve_path(&self.logo),
        )?
        .with_face_cache(FaceCache::default());

        compositor.generate_to_file(&config, &output)?;

        tracing::info!(
            output = %output.display(),
            format = config.format.as_str(),
            texts = config.texts.len(),
            "Rendered layout"
        );
        Ok(())
    }
}
