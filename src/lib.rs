//! **Convert cataloged SBOM graphs into SPDX 2.2 JSON documents.**
//!
//! `sbom-spdx` takes the package catalog, file metadata and relationship
//! graph a cataloger produced for a scanned source (a container image, a
//! directory or a single file) and renders it as a standards-conformant
//! SPDX 2.2 JSON document.
//!
//! ## Key Features
//!
//! - **Deterministic output**: packages, files and relationships are emitted in
//!   canonical orders, so the same logical input always yields the same
//!   document apart from its creation time and namespace UUID.
//! - **Stable identifiers**: SPDX element ids are derived from source identity
//!   and sanitized to the SPDX character set.
//! - **Honest lossiness**: relationships SPDX 2.2 cannot express are dropped,
//!   logged and listed in a [`ConversionReport`].
//! - **External document references**: `described-by` edges pointing at other
//!   SPDX documents with a SHA1 checksum become `externalDocumentRefs`.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the input aggregate, [`Sbom`].
//! - **[`parsers`]**: reads catalog JSON into an [`Sbom`].
//! - **[`spdx22`]**: the converter. [`DocumentBuilder`] turns an [`Sbom`] into
//!   a [`Document`].
//! - **[`config`]**: document and output settings, loadable from YAML.
//! - **[`pipeline`]**: parse → convert → write stages shared by the CLI.
//!
//! ## Getting Started
//!
//! ```
//! use sbom_spdx::{convert_json, to_json, DocumentConfig};
//!
//! let catalog = r#"{
//!     "source": { "scheme": "image", "userInput": "alpine:3.18" },
//!     "packages": [ { "id": "pkg1", "name": "musl", "version": "1.2.4", "licenses": ["MIT"] } ],
//!     "relationships": [
//!         { "from": { "package": "pkg1" }, "to": { "file": { "realPath": "/lib/ld-musl-x86_64.so.1" } }, "type": "contains" }
//!     ]
//! }"#;
//!
//! let (document, report) = convert_json(catalog, &DocumentConfig::default())?;
//! assert_eq!(document.name, "alpine-3.18");
//! assert_eq!(document.packages[0].has_files.len(), 1);
//! assert!(!report.has_warnings());
//!
//! let json = to_json(&document, true)?;
//! assert!(json.contains("\"spdxVersion\": \"SPDX-2.2\""));
//! # Ok::<(), sbom_spdx::SbomSpdxError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `sbom-spdx` library crate. The binary of the
//! same name wraps [`cli::run_convert`] and [`cli::run_inspect`].

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::similar_names)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod spdx22;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, DocumentConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, Result, SbomSpdxError};
pub use model::{Coordinates, Endpoint, Package, PackageId, Relationship, RelationshipType, Sbom};
pub use parsers::{parse_sbom, parse_sbom_str, SbomParser};
pub use spdx22::{ConversionReport, Document, DocumentBuilder, DropReason};

/// Parse catalog JSON and convert it in one step
pub fn convert_json(
    content: &str,
    config: &DocumentConfig,
) -> Result<(Document, ConversionReport)> {
    let sbom = parse_sbom_str(content).context("reading catalog JSON")?;
    Ok(DocumentBuilder::new(config.clone()).build_with_report(&sbom))
}

/// Serialize a document as SPDX JSON
pub fn to_json(document: &Document, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    encoded.context("encoding SPDX document")
}
