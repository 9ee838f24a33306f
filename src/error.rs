//! Error types for image generation
//!
//! Every failure carries the operand it concerns (template, logo, a text
//! entry or an output path) so callers can tell which input was bad.

use std::fmt;
use thiserror::Error;

/// Which input image an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Template,
    Logo,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Template => write!(f, "template"),
            ImageRole::Logo => write!(f, "logo"),
        }
    }
}

/// Errors that can occur while loading inputs or generating an image
#[derive(Error, Debug)]
pub enum OgImageError {
    /// Image bytes are malformed or in an unsupported format
    #[error("Failed to decode {role} image: {message}")]
    Decode { role: ImageRole, message: String },

    /// Font bytes could not be parsed into a face
    #[error("Failed to load font for {context}: {message}")]
    Font { context: String, message: String },

    /// Pixel buffer does not match its declared bounds
    #[error("Failed to draw image: {message}")]
    Draw { message: String },

    /// Serialization to the output format failed
    #[error("Failed to encode to {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// File open, read, create or write failed
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Layout file is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OgImageError>;

impl OgImageError {
    pub fn decode_failed(role: ImageRole, message: impl Into<String>) -> Self {
        OgImageError::Decode {
            role,
            message: message.into(),
        }
    }

    pub fn font_failed(context: impl Into<String>, message: impl Into<String>) -> Self {
        OgImageError::Font {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn draw_failed(message: impl Into<String>) -> Self {
        OgImageError::Draw {
            message: message.into(),
        }
    }

    pub fn encode_failed(format: &'static str, message: impl Into<String>) -> Self {
        OgImageError::Encode {
            format,
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        OgImageError::Io {
            context: context.into(),
            source,
        }
    }

    /// Re-label a font error with the text entry it came from.
    pub(crate) fn in_text_entry(self, index: usize) -> Self {
        match self {
            OgImageError::Font { context, message } => OgImageError::Font {
                context: format!("text entry {} ({})", index, context),
                message,
            },
            OgImageError::Io { context, source } => OgImageError::Io {
                context: format!("text entry {}: {}", index, context),
                source,
            },
            other => other,
        }
    }
}
