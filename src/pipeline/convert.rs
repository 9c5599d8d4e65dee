//! Convert stage: build the SPDX document and encode it.

use crate::config::DocumentConfig;
use crate::model::Sbom;
use crate::spdx22::{ConversionReport, Document, DocumentBuilder};
use anyhow::Result;

use super::PipelineError;

/// Result of converting one SBOM
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: Document,
    pub report: ConversionReport,
}

/// Convert an SBOM using the given document settings
#[must_use]
pub fn convert_sbom(sbom: &Sbom, config: &DocumentConfig, quiet: bool) -> Conversion {
    let (document, report) = DocumentBuilder::new(config.clone()).build_with_report(sbom);

    if !quiet {
        tracing::info!(
            "Built {} with {} packages, {} files, {} relationships",
            document.document_namespace,
            document.packages.len(),
            document.files.len(),
            document.relationships.len()
        );
        if report.has_warnings() {
            tracing::warn!(
                "{} relationships could not be represented in SPDX 2.2",
                report.dropped.len()
            );
        }
    }

    Conversion { document, report }
}

/// Encode a document as JSON, indented when `pretty`
pub fn serialize_document(document: &Document, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    encoded.map_err(|e| PipelineError::SerializeFailed { source: e.into() }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, Package, PackageId, Relationship, RelationshipType};

    fn sample() -> Sbom {
        let mut sbom = Sbom::default();
        sbom.artifacts.packages.add(Package::new("a", "alpha", "1.0"));
        sbom.artifacts.packages.add(Package::new("b", "beta", "2.0"));
        sbom.relationships.push(Relationship::new(
            Endpoint::Package(PackageId::new("a")),
            Endpoint::Package(PackageId::new("b")),
            RelationshipType::EvidentBy,
        ));
        sbom
    }

    #[test]
    fn test_convert_collects_report() {
        let conversion = convert_sbom(&sample(), &DocumentConfig::default(), true);
        assert_eq!(conversion.document.packages.len(), 2);
        assert!(conversion.document.relationships.is_empty());
        assert_eq!(conversion.report.dropped.len(), 1);
    }

    #[test]
    fn test_serialize_pretty_and_compact() {
        let conversion = convert_sbom(&sample(), &DocumentConfig::default(), true);
        let pretty = serialize_document(&conversion.document, true).unwrap();
        let compact = serialize_document(&conversion.document, false).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }
}
