//! Relationships between cataloged elements.

use super::{Coordinates, Digest, PackageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship kind from the cataloger's internal vocabulary.
///
/// Labels the converter does not know are preserved as [`Self::Other`] so
/// they can be reported when dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    /// The parent contains the child (package contains file)
    Contains,
    /// The parent package claims a child package found at an overlapping location
    OwnershipByFileOverlap,
    /// The from-element is a dependency of the to-element
    DependencyOf,
    /// The from-element is described by the to-element (often another document)
    DescribedBy,
    /// The from-element is evidenced by the to-element
    EvidentBy,
    /// Runtime-only dependency
    RuntimeDependencyOf,
    /// Any other label
    Other(String),
}

impl RelationshipType {
    /// The label used in serialized catalogs and diagnostics
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Contains => "contains",
            Self::OwnershipByFileOverlap => "ownership-by-file-overlap",
            Self::DependencyOf => "dependency-of",
            Self::DescribedBy => "described-by",
            Self::EvidentBy => "evident-by",
            Self::RuntimeDependencyOf => "runtime-dependency-of",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for RelationshipType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "contains" => Self::Contains,
            "ownership-by-file-overlap" => Self::OwnershipByFileOverlap,
            "dependency-of" => Self::DependencyOf,
            "described-by" => Self::DescribedBy,
            "evident-by" => Self::EvidentBy,
            "runtime-dependency-of" => Self::RuntimeDependencyOf,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for RelationshipType {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<RelationshipType> for String {
    fn from(ty: RelationshipType) -> Self {
        match ty {
            RelationshipType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pointer to an element in a different SBOM document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExternalDocumentRef {
    /// Reference id, unique within the referencing document
    pub id: String,
    /// Checksum of the referenced document
    pub checksum: Digest,
    /// Where the referenced document can be retrieved
    pub uri: String,
}

/// One side of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Package(PackageId),
    File(Coordinates),
    External(ExternalDocumentRef),
}

impl Endpoint {
    /// Stable identity of the endpoint
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Package(id) => id.as_str().to_string(),
            Self::File(coordinates) => coordinates.id(),
            Self::External(reference) => reference.id.clone(),
        }
    }

    #[must_use]
    pub const fn is_package(&self) -> bool {
        matches!(self, Self::Package(_))
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    #[must_use]
    pub const fn is_external_reference(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// The package id, if this endpoint is a package
    #[must_use]
    pub const fn as_package(&self) -> Option<&PackageId> {
        match self {
            Self::Package(id) => Some(id),
            _ => None,
        }
    }

    /// The coordinates, if this endpoint is a file
    #[must_use]
    pub const fn as_file(&self) -> Option<&Coordinates> {
        match self {
            Self::File(coordinates) => Some(coordinates),
            _ => None,
        }
    }

    /// The external document reference, if this endpoint is one
    #[must_use]
    pub const fn as_external_reference(&self) -> Option<&ExternalDocumentRef> {
        match self {
            Self::External(reference) => Some(reference),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(id) => write!(f, "package:{id}"),
            Self::File(coordinates) => write!(f, "file:{coordinates}"),
            Self::External(reference) => write!(f, "external:{}", reference.id),
        }
    }
}

/// A directed, typed edge between two endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Relationship {
    pub from: Endpoint,
    pub to: Endpoint,
    #[serde(rename = "type")]
    pub kind: RelationshipType,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(from: Endpoint, to: Endpoint, kind: RelationshipType) -> Self {
        Self { from, to, kind }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.kind, self.to)
    }
}
