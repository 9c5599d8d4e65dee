//! Cataloged packages and the package catalog.

use super::{Coordinates, Digest};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable package identity assigned by the cataloger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Package ecosystem the cataloger found the package in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum PackageType {
    Apk,
    Deb,
    Rpm,
    Npm,
    Python,
    JavaArchive,
    JenkinsPlugin,
    Gem,
    GoModule,
    RustCrate,
    PhpComposer,
    DartPub,
    Dotnet,
    #[default]
    Unknown,
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Apk => "apk",
            Self::Deb => "deb",
            Self::Rpm => "rpm",
            Self::Npm => "npm",
            Self::Python => "python",
            Self::JavaArchive => "java-archive",
            Self::JenkinsPlugin => "jenkins-plugin",
            Self::Gem => "gem",
            Self::GoModule => "go-module",
            Self::RustCrate => "rust-crate",
            Self::PhpComposer => "php-composer",
            Self::DartPub => "dart-pub",
            Self::Dotnet => "dotnet",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Who originally produced the package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "lowercase")]
pub enum Originator {
    Person(String),
    Organization(String),
}

/// Type-specific package metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum PackageMetadata {
    /// Java archive metadata, the only kind that carries archive digests
    JavaArchive(JavaArchiveMetadata),
    /// Metadata this converter does not interpret
    Other(serde_json::Value),
}

impl PackageMetadata {
    /// Digests of the package archive itself, empty for kinds that carry none
    #[must_use]
    pub fn archive_digests(&self) -> &[Digest] {
        match self {
            Self::JavaArchive(java) => &java.archive_digests,
            Self::Other(_) => &[],
        }
    }
}

/// Metadata for packages found inside Java archives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaArchiveMetadata {
    /// Path of the archive, including nested archive segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_path: Option<String>,
    /// Digests computed over the archive bytes
    #[serde(default)]
    pub archive_digests: Vec<Digest>,
}

/// A cataloged package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "type")]
    pub package_type: PackageType,
    /// Raw license values as found in the package manifest
    #[serde(default)]
    pub licenses: Vec<String>,
    /// Where the cataloger found evidence of this package
    #[serde(default)]
    pub locations: Vec<Coordinates>,
    #[serde(default)]
    pub cpes: Vec<String>,
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub download_location: Option<String>,
    #[serde(default)]
    pub originator: Option<Originator>,
    #[serde(default)]
    pub metadata: Option<PackageMetadata>,
}

impl Package {
    /// Create a package with only identity, name and version set
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: PackageId::new(id),
            name: name.into(),
            version: version.into(),
            package_type: PackageType::Unknown,
            licenses: Vec::new(),
            locations: Vec::new(),
            cpes: Vec::new(),
            purl: None,
            description: None,
            homepage: None,
            download_location: None,
            originator: None,
            metadata: None,
        }
    }

    /// Archive digests from type-specific metadata, empty if none
    #[must_use]
    pub fn archive_digests(&self) -> &[Digest] {
        self.metadata
            .as_ref()
            .map(PackageMetadata::archive_digests)
            .unwrap_or_default()
    }
}

/// Sort key for the catalog's canonical order: name, then version, then id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageSortKey<'a> {
    name: &'a str,
    version: &'a str,
    id: &'a PackageId,
}

impl<'a> PackageSortKey<'a> {
    /// Build the sort key for a package
    #[must_use]
    pub fn from_package(package: &'a Package) -> Self {
        Self {
            name: &package.name,
            version: &package.version,
            id: &package.id,
        }
    }
}

/// Packages keyed by identity, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PackageCatalog {
    packages: IndexMap<PackageId, Package>,
}

impl PackageCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package.
    ///
    /// Returns the previous package if one with the same id was replaced.
    pub fn add(&mut self, package: Package) -> Option<Package> {
        self.packages.insert(package.id.clone(), package)
    }

    /// Look up a package by id
    #[must_use]
    pub fn get(&self, id: &PackageId) -> Option<&Package> {
        self.packages.get(id)
    }

    /// Whether a package with this id is cataloged
    #[must_use]
    pub fn contains(&self, id: &PackageId) -> bool {
        self.packages.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate packages in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Packages in canonical order, independent of insertion order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Package> {
        let mut packages: Vec<&Package> = self.packages.values().collect();
        packages.sort_by(|a, b| {
            PackageSortKey::from_package(a).cmp(&PackageSortKey::from_package(b))
        });
        packages
    }
}

impl FromIterator<Package> for PackageCatalog {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for package in iter {
            catalog.add(package);
        }
        catalog
    }
}
