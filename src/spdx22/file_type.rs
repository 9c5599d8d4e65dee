//! Coarse SPDX file types derived from MIME metadata.

use crate::model::FileMetadata;
use serde::{Deserialize, Serialize};

/// SPDX 2.2 file type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Source,
    Binary,
    Archive,
    Application,
    Audio,
    Image,
    Text,
    Video,
    Documentation,
    Spdx,
    Other,
}

/// Primary type by MIME top-level category
const MIME_CATEGORIES: &[(&str, FileType)] = &[
    ("image", FileType::Image),
    ("video", FileType::Video),
    ("application", FileType::Application),
    ("text", FileType::Text),
    ("audio", FileType::Audio),
];

/// MIME types recognized as executable binaries
pub const EXECUTABLE_MIME_TYPES: &[&str] = &[
    "application/x-executable",
    "application/x-mach-binary",
    "application/x-elf",
    "application/x-sharedlib",
    "application/vnd.microsoft.portable-executable",
];

/// MIME types recognized as archive containers
pub const ARCHIVE_MIME_TYPES: &[&str] = &[
    "application/gzip",
    "application/x-gzip",
    "application/x-7z-compressed",
    "application/x-bzip2",
    "application/x-cpio",
    "application/x-compress",
    "application/x-lz4",
    "application/x-lzip",
    "application/x-lzma",
    "application/x-rar-compressed",
    "application/x-tar",
    "application/x-xz",
    "application/x-zstd",
    "application/zip",
    "application/java-archive",
    "application/x-java-archive",
];

/// Whether a MIME type denotes an executable binary
#[must_use]
pub fn is_executable(mime_type: &str) -> bool {
    EXECUTABLE_MIME_TYPES.contains(&mime_type)
}

/// Whether a MIME type denotes an archive container
#[must_use]
pub fn is_archive(mime_type: &str) -> bool {
    ARCHIVE_MIME_TYPES.contains(&mime_type)
}

/// Classify a file from its metadata.
///
/// Without metadata nothing is known and no types are assigned. With
/// metadata the result is never empty: a primary category by MIME prefix,
/// plus additive `BINARY` / `ARCHIVE` tags, or a lone `OTHER`.
#[must_use]
pub fn classify(metadata: Option<&FileMetadata>) -> Vec<FileType> {
    let Some(metadata) = metadata else {
        return Vec::new();
    };

    let mime_type = metadata.mime_type.as_str();
    let prefix = mime_type.split('/').next().unwrap_or_default();

    let mut types: Vec<FileType> = MIME_CATEGORIES
        .iter()
        .filter(|(category, _)| *category == prefix)
        .map(|(_, ty)| *ty)
        .collect();

    if is_executable(mime_type) {
        types.push(FileType::Binary);
    }
    if is_archive(mime_type) {
        types.push(FileType::Archive);
    }

    if types.is_empty() {
        types.push(FileType::Other);
    }
    types
}
