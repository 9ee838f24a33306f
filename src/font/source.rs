//! Where a text entry's face comes from.

use super::cache::FaceCache;
use super::face::Face;
use crate::error::{OgImageError, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Font of a text entry, either still to be parsed or ready to draw.
#[derive(Debug, Clone, Default)]
pub enum FontSource {
    /// Built-in fixed-width bitmap face.
    #[default]
    Builtin,
    /// Outline font bytes (TrueType/OpenType), parsed at the entry's size.
    Bytes(Arc<[u8]>),
    /// Outline font file, read and parsed at the entry's size.
    Path(PathBuf),
    /// A face that is already sized; the entry's size is ignored.
    Resolved(Face),
}

impl FontSource {
    pub fn bytes(data: impl Into<Arc<[u8]>>) -> Self {
        FontSource::Bytes(data.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        FontSource::Path(path.into())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, FontSource::Resolved(_))
    }

    /// Produce a face for this source at `size`.
    ///
    /// When `cache` is given, byte and file sources go through it.
    pub fn resolve(&self, size: f32, cache: Option<&FaceCache>) -> Result<Face> {
        match self {
            FontSource::Builtin => Ok(Face::builtin(size)),
            FontSource::Resolved(face) => Ok(face.clone()),
            FontSource::Bytes(data) => parse(data, size, cache),
            FontSource::Path(path) => {
                let data = std::fs::read(path).map_err(|e| {
                    OgImageError::io(format!("Failed to read font file {}", path.display()), e)
                })?;
                parse(&data, size, cache).map_err(|e| match e {
                    OgImageError::Font { message, .. } => {
                        OgImageError::font_failed(path.display().to_string(), message)
                    }
                    other => other,
                })
            }
        }
    }
}

fn parse(data: &[u8], size: f32, cache: Option<&FaceCache>) -> Result<Face> {
    match cache {
        Some(cache) => cache.get_or_parse(data, size),
        None => Face::from_bytes(data.to_vec(), size),
    }
}
