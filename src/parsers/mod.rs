//! SBOM input parsers.
//!
//! This module reads the cataloger's SBOM graph from catalog JSON into the
//! [`Sbom`](crate::model::Sbom) aggregate the converter consumes.
//!
//! ## Format Detection
//!
//! Each parser reports a confidence score (0.0-1.0) for handling content.
//! Documents that are already SPDX or CycloneDX are recognized and rejected
//! with a specific error rather than misread as catalogs.
//!
//! ## Usage
//!
//! ```no_run
//! use sbom_spdx::parsers::parse_sbom;
//! use std::path::Path;
//!
//! let sbom = parse_sbom(Path::new("catalog.json")).unwrap();
//! println!("{} packages", sbom.package_count());
//! ```

mod catalog;
mod traits;

pub use catalog::{CatalogParser, SUPPORTED_SCHEMA_MAJOR};
pub use traits::{FormatConfidence, FormatDetection, ParseError, SbomParser};

use crate::model::Sbom;
use std::path::Path;

/// Maximum input file size (512 MB).
const MAX_SBOM_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Name the exchange format a document already is, if it is one
fn exchange_format(content: &str) -> Option<&'static str> {
    let value: serde_json::Value = serde_json::from_str(content).ok()?;
    let object = value.as_object()?;
    if object.contains_key("spdxVersion") {
        Some("SPDX")
    } else if object.contains_key("bomFormat") {
        Some("CycloneDX")
    } else {
        None
    }
}

/// Read and parse an SBOM file
///
/// Returns an error if the file exceeds the size limit to prevent OOM.
pub fn parse_sbom(path: &Path) -> Result<Sbom, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SBOM_FILE_SIZE {
        return Err(ParseError::IoError(format!(
            "SBOM file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_SBOM_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_sbom_str(&content)
}

/// Parse an SBOM from string content
pub fn parse_sbom_str(content: &str) -> Result<Sbom, ParseError> {
    let parser = CatalogParser::new();
    let detection = parser.detect(content);
    if detection.confidence.can_parse() {
        for warning in &detection.warnings {
            tracing::debug!(format = parser.format_name(), "{warning}");
        }
        return parser.parse_str(content);
    }

    match exchange_format(content) {
        Some(format) => Err(ParseError::UnknownFormat(format!(
            "input is already a {format} document, expected catalog JSON"
        ))),
        // Let the full parser report the precise JSON or structure error
        None => parser.parse_str(content),
    }
}
