//! Catalog JSON parser.
//!
//! Catalog JSON is the interchange form of the cataloger's SBOM graph:
//!
//! ```json
//! {
//!   "schema": { "version": "1.0" },
//!   "descriptor": { "name": "syft", "version": "0.60.0" },
//!   "source": { "scheme": "image", "userInput": "alpine:3.18" },
//!   "packages": [ { "id": "pkg1", "name": "alpha", "version": "1.0" } ],
//!   "files": [ { "location": { "realPath": "/usr/bin/alpha" } } ],
//!   "relationships": [
//!     { "from": { "package": "pkg1" }, "to": { "file": { "realPath": "/usr/bin/alpha" } }, "type": "contains" }
//!   ]
//! }
//! ```

use super::traits::{FormatConfidence, FormatDetection, ParseError, SbomParser};
use crate::model::{
    Coordinates, Descriptor, Digest, Endpoint, FileMetadata, Package, Relationship,
    RelationshipType, Sbom, SourceMetadata,
};
use serde::Deserialize;

/// Major schema version this parser understands
pub const SUPPORTED_SCHEMA_MAJOR: &str = "1";

// ============================================================================
// Raw catalog structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    #[serde(default)]
    schema: Option<RawSchema>,
    #[serde(default)]
    descriptor: Option<Descriptor>,
    #[serde(default)]
    source: SourceMetadata,
    packages: Vec<Package>,
    #[serde(default)]
    files: Vec<RawFile>,
    #[serde(default)]
    relationships: Vec<RawRelationship>,
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    version: String,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    location: Coordinates,
    #[serde(default)]
    metadata: Option<FileMetadata>,
    #[serde(default)]
    digests: Option<Vec<Digest>>,
}

#[derive(Debug, Deserialize)]
struct RawRelationship {
    from: Endpoint,
    to: Endpoint,
    #[serde(rename = "type")]
    kind: RelationshipType,
}

// ============================================================================
// Parser
// ============================================================================

/// Parser for catalog JSON documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogParser;

impl CatalogParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build(raw: RawCatalog) -> Result<Sbom, ParseError> {
        if let Some(schema) = &raw.schema {
            check_schema_version(&schema.version)?;
        }

        let mut sbom = Sbom::new(raw.source, raw.descriptor.unwrap_or_default());

        for mut package in raw.packages {
            if package.id.as_str().is_empty() {
                return Err(ParseError::MissingField(format!("id of package '{}'", package.name)));
            }
            package.locations = package.locations.into_iter().map(normalize).collect();
            let id = package.id.clone();
            if sbom.artifacts.packages.add(package).is_some() {
                return Err(ParseError::InvalidStructure(format!("duplicate package id '{id}'")));
            }
        }

        for file in raw.files {
            let location = normalize(file.location);
            sbom.artifacts.listed_files.insert(location.clone());
            if let Some(metadata) = file.metadata {
                sbom.artifacts.file_metadata.insert(location.clone(), metadata);
            }
            if let Some(digests) = file.digests {
                sbom.artifacts.file_digests.insert(location, digests);
            }
        }

        for raw_relationship in raw.relationships {
            let from = resolve_endpoint(&sbom, raw_relationship.from)?;
            let to = resolve_endpoint(&sbom, raw_relationship.to)?;
            sbom.relationships.push(Relationship::new(from, to, raw_relationship.kind));
        }

        tracing::debug!(
            packages = sbom.package_count(),
            files = sbom.artifacts.listed_files.len(),
            relationships = sbom.relationships.len(),
            "parsed catalog"
        );
        Ok(sbom)
    }
}

fn check_schema_version(version: &str) -> Result<(), ParseError> {
    match version.split('.').next() {
        Some(SUPPORTED_SCHEMA_MAJOR) => Ok(()),
        _ => Err(ParseError::UnsupportedVersion(format!(
            "catalog schema {version} (supported: {SUPPORTED_SCHEMA_MAJOR}.x)"
        ))),
    }
}

/// Treat an empty filesystem id the same as none, so lookups by key agree
fn normalize(coordinates: Coordinates) -> Coordinates {
    match coordinates.file_system_id {
        Some(id) => Coordinates::with_file_system(coordinates.real_path, id),
        None => coordinates,
    }
}

fn resolve_endpoint(sbom: &Sbom, endpoint: Endpoint) -> Result<Endpoint, ParseError> {
    match endpoint {
        Endpoint::Package(id) if !sbom.artifacts.packages.contains(&id) => {
            Err(ParseError::InvalidStructure(format!(
                "relationship references unknown package '{id}'"
            )))
        }
        Endpoint::File(coordinates) => Ok(Endpoint::File(normalize(coordinates))),
        other => Ok(other),
    }
}

impl SbomParser for CatalogParser {
    fn parse_str(&self, content: &str) -> Result<Sbom, ParseError> {
        let raw: RawCatalog = serde_json::from_str(content)?;
        Self::build(raw)
    }

    fn format_name(&self) -> &str {
        "catalog-json"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let trimmed = content.trim_start();
        if !trimmed.starts_with('{') {
            return FormatDetection::no_match();
        }

        let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
            return FormatDetection::no_match();
        };
        let Some(object) = value.as_object() else {
            return FormatDetection::no_match();
        };

        // Already an exchange-format document, not a catalog
        if object.contains_key("spdxVersion") || object.contains_key("bomFormat") {
            return FormatDetection::no_match();
        }

        if !object.get("packages").is_some_and(serde_json::Value::is_array) {
            return FormatDetection::no_match();
        }

        let version = object
            .get("schema")
            .and_then(|schema| schema.get("version"))
            .and_then(serde_json::Value::as_str);
        if let Some(version) = version {
            return FormatDetection::with_confidence(FormatConfidence::CERTAIN).version(version);
        }

        if ["relationships", "source", "descriptor", "files"]
            .iter()
            .any(|key| object.contains_key(*key))
        {
            FormatDetection::with_confidence(FormatConfidence::HIGH)
        } else {
            FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                .warning("no schema, source or relationships")
        }
    }
}
