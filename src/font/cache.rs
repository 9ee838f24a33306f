//! Optional cache of parsed faces.
//!
//! Without a cache every `generate` call re-parses the font bytes of every
//! text entry. Attaching a [`FaceCache`] to a compositor keeps parsed faces
//! keyed by the font bytes' hash and the requested size, so repeated renders
//! with the same fonts skip parsing.

use super::face::Face;
use crate::constants::DEFAULT_FACE_CACHE_CAPACITY;
use crate::error::Result;
use moka::sync::Cache;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FaceKey {
    font_hash: u64,
    font_len: usize,
    size_bits: u32,
}

impl FaceKey {
    fn new(data: &[u8], size: f32) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        data.hash(&mut hasher);
        Self {
            font_hash: hasher.finish(),
            font_len: data.len(),
            size_bits: size.to_bits(),
        }
    }
}

/// Thread-safe, bounded cache of outline faces.
///
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct FaceCache {
    faces: Cache<FaceKey, Face>,
}

impl std::fmt::Debug for FaceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceCache")
            .field("entries", &self.faces.entry_count())
            .finish()
    }
}

impl Default for FaceCache {
    fn default() -> Self {
        Self::new(DEFAULT_FACE_CACHE_CAPACITY)
    }
}

impl FaceCache {
    /// Create a cache holding at most `capacity` faces.
    pub fn new(capacity: u64) -> Self {
        Self {
            faces: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Return the cached face for `(data, size)`, parsing it on a miss.
    ///
    /// Parse failures are not cached.
    pub fn get_or_parse(&self, data: &[u8], size: f32) -> Result<Face> {
        let key = FaceKey::new(data, size);
        if let Some(face) = self.faces.get(&key) {
            tracing::trace!(size = size, "Face cache hit");
            return Ok(face);
        }

        let face = Face::from_bytes(data.to_vec(), size)?;
        self.faces.insert(key, face.clone());
        tracing::debug!(size = size, font_bytes = data.len(), "Parsed and cached face");
        Ok(face)
    }

    /// Whether a face for `(data, size)` is cached.
    pub fn contains(&self, data: &[u8], size: f32) -> bool {
        self.faces.get(&FaceKey::new(data, size)).is_some()
    }

    pub fn clear(&self) {
        self.faces.invalidate_all();
    }
}
