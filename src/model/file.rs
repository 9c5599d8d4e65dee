//! File locations and the metadata cataloged for them.

use crate::utils::content_hash;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a file location: a real path plus an optional filesystem
/// (image layer) qualifier.
///
/// Equality, hashing and ordering use the real path and [`Self::layer_id`],
/// so an empty filesystem id is the same key as no filesystem id. Ordering
/// is by real path, then layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Absolute path of the file within its filesystem
    pub real_path: String,
    /// Layer or filesystem identifier, absent for single-filesystem sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
}

impl Coordinates {
    /// Coordinates on the default (unnamed) filesystem.
    pub fn new(real_path: impl Into<String>) -> Self {
        Self {
            real_path: real_path.into(),
            file_system_id: None,
        }
    }

    /// Coordinates within a named filesystem or image layer.
    ///
    /// An empty identifier is treated as no identifier.
    pub fn with_file_system(
        real_path: impl Into<String>,
        file_system_id: impl Into<String>,
    ) -> Self {
        let id = file_system_id.into();
        Self {
            real_path: real_path.into(),
            file_system_id: if id.is_empty() { None } else { Some(id) },
        }
    }

    /// Stable identity derived from the path and filesystem id.
    ///
    /// Rendered as 16 lowercase hex digits of an xxh3 hash.
    #[must_use]
    pub fn id(&self) -> String {
        let capacity = self.real_path.len() + 1 + self.layer_id().map_or(0, str::len);
        let mut input = Vec::with_capacity(capacity);
        input.extend_from_slice(self.real_path.as_bytes());
        input.push(0);
        if let Some(layer) = self.layer_id() {
            input.extend_from_slice(layer.as_bytes());
        }
        format!("{:016x}", content_hash(&input))
    }

    /// The non-empty filesystem identifier, if any.
    #[must_use]
    pub fn layer_id(&self) -> Option<&str> {
        self.file_system_id.as_deref().filter(|id| !id.is_empty())
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.real_path == other.real_path && self.layer_id() == other.layer_id()
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.real_path.hash(state);
        self.layer_id().hash(state);
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> Ordering {
        self.real_path
            .cmp(&other.real_path)
            .then_with(|| self.layer_id().cmp(&other.layer_id()))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layer_id() {
            Some(layer) => write!(f, "RealPath={} Layer={}", self.real_path, layer),
            None => write!(f, "RealPath={}", self.real_path),
        }
    }
}

/// Metadata captured for a cataloged file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Detected MIME type (e.g. `application/x-executable`), empty if unknown
    #[serde(default)]
    pub mime_type: String,
}

impl FileMetadata {
    /// Metadata with the given MIME type
    pub fn with_mime_type(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
        }
    }
}

/// A precomputed content digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest {
    /// Algorithm name as reported by the producer (any case)
    pub algorithm: String,
    /// Hex encoded digest value
    pub value: String,
}

impl Digest {
    /// Create a new digest
    pub fn new(algorithm: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            value: value.into(),
        }
    }
}
