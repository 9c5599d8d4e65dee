//! Where the cataloged SBOM came from and what produced it.

use serde::{Deserialize, Serialize};

/// The scanned source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum SourceMetadata {
    /// A container image, identified by what the user asked for
    Image {
        #[serde(rename = "userInput")]
        user_input: String,
    },
    /// A directory on the local filesystem
    Directory { path: String },
    /// A single file
    File { path: String },
    #[default]
    Unknown,
}

impl SourceMetadata {
    /// Short scheme label used in document namespaces
    #[must_use]
    pub const fn scheme_label(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Directory { .. } => "dir",
            Self::File { .. } => "file",
            Self::Unknown => "unknown-source-type",
        }
    }
}

/// Identity of the application that produced the SBOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub version: String,
}

impl Descriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Creator tool string, `<name>-<version>`
    #[must_use]
    pub fn tool(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
