//! Inspect command handler.
//!
//! Implements the `inspect` subcommand: a dry-run conversion that reports
//! what the SPDX document would contain and which relationships would be
//! dropped, without writing the document.

use crate::config::DocumentConfig;
use crate::pipeline::{
    convert_sbom, parse_sbom_with_context, write_output, Conversion, OutputTarget,
};
use crate::spdx22::{DropReason, DroppedRelationship};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Dropped relationships listed in the text summary
const DROP_PREVIEW_LIMIT: usize = 20;

/// What a conversion would produce
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectSummary {
    pub name: String,
    pub namespace: String,
    pub creators: Vec<String>,
    pub packages: usize,
    pub files: usize,
    pub relationships: usize,
    pub external_document_refs: usize,
    pub dropped: Vec<DroppedRelationship>,
}

impl InspectSummary {
    #[must_use]
    pub fn from_conversion(conversion: &Conversion) -> Self {
        let document = &conversion.document;
        Self {
            name: document.name.clone(),
            namespace: document.document_namespace.clone(),
            creators: document.creation_info.creators.clone(),
            packages: document.packages.len(),
            files: document.files.len(),
            relationships: document.relationships.len(),
            external_document_refs: document.external_document_refs.len(),
            dropped: conversion.report.dropped.clone(),
        }
    }

    /// Render as human-readable text
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Document:      {}", self.name);
        let _ = writeln!(out, "Namespace:     {}", self.namespace);
        let _ = writeln!(out, "Creators:      {}", self.creators.join(", "));
        let _ = writeln!(out, "Packages:      {}", self.packages);
        let _ = writeln!(out, "Files:         {}", self.files);
        let _ = writeln!(
            out,
            "Relationships: {} emitted, {} dropped",
            self.relationships,
            self.dropped.len()
        );
        let _ = writeln!(out, "External refs: {}", self.external_document_refs);

        if self.dropped.is_empty() {
            return out;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Dropped relationships:");
        for reason in [
            DropReason::UnsupportedType,
            DropReason::ExternalFrom,
            DropReason::IneligibleExternal,
        ] {
            let count = self.dropped.iter().filter(|d| d.reason == reason).count();
            if count > 0 {
                let _ = writeln!(out, "  {reason}: {count}");
            }
        }
        let _ = writeln!(out);
        for dropped in self.dropped.iter().take(DROP_PREVIEW_LIMIT) {
            let _ = writeln!(
                out,
                "  {} -> {} ({}): {}",
                dropped.from, dropped.to, dropped.kind, dropped.reason
            );
        }
        if self.dropped.len() > DROP_PREVIEW_LIMIT {
            let _ = writeln!(out, "  ... and {} more", self.dropped.len() - DROP_PREVIEW_LIMIT);
        }
        out
    }
}

/// Run the inspect command
#[allow(clippy::needless_pass_by_value)]
pub fn run_inspect(input: PathBuf, config: DocumentConfig, json: bool, quiet: bool) -> Result<()> {
    let parsed = parse_sbom_with_context(&input, quiet)?;
    let conversion = convert_sbom(&parsed.sbom, &config, true);
    let summary = InspectSummary::from_conversion(&conversion);

    let content = if json {
        serde_json::to_string_pretty(&summary).context("Failed to serialize inspect summary")?
    } else {
        summary.to_text()
    };
    write_output(content.trim_end(), &OutputTarget::Stdout, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Coordinates, Endpoint, Package, PackageId, Relationship, RelationshipType, Sbom,
    };

    fn conversion(extra_drops: usize) -> Conversion {
        let mut sbom = Sbom::default();
        sbom.artifacts.packages.add(Package::new("a", "alpha", "1.0"));
        sbom.artifacts.packages.add(Package::new("b", "beta", "2.0"));
        sbom.relationships.push(Relationship::new(
            Endpoint::Package(PackageId::new("a")),
            Endpoint::File(Coordinates::new("/bin/alpha")),
            RelationshipType::Contains,
        ));
        for _ in 0..extra_drops {
            sbom.relationships.push(Relationship::new(
                Endpoint::Package(PackageId::new("a")),
                Endpoint::Package(PackageId::new("b")),
                RelationshipType::RuntimeDependencyOf,
            ));
        }
        convert_sbom(&sbom, &DocumentConfig::default(), true)
    }

    #[test]
    fn test_summary_counts() {
        let summary = InspectSummary::from_conversion(&conversion(1));
        assert_eq!(summary.packages, 2);
        assert_eq!(summary.files, 1);
        assert_eq!(summary.relationships, 1);
        assert_eq!(summary.dropped.len(), 1);
    }

    #[test]
    fn test_text_lists_drops() {
        let text = InspectSummary::from_conversion(&conversion(1)).to_text();
        assert!(text.contains("1 emitted, 1 dropped"), "{text}");
        assert!(text.contains("unsupported relationship type: 1"), "{text}");
        assert!(text.contains("package:a -> package:b (runtime-dependency-of)"), "{text}");
    }

    #[test]
    fn test_text_truncates_long_drop_list() {
        let text = InspectSummary::from_conversion(&conversion(DROP_PREVIEW_LIMIT + 5)).to_text();
        assert!(text.contains("... and 5 more"), "{text}");
    }

    #[test]
    fn test_text_without_drops_has_no_section() {
        let text = InspectSummary::from_conversion(&conversion(0)).to_text();
        assert!(!text.contains("Dropped relationships"));
    }

    #[test]
    fn test_summary_json_field_names() {
        let value = serde_json::to_value(InspectSummary::from_conversion(&conversion(1))).unwrap();
        assert!(value.get("externalDocumentRefs").is_some());
        assert_eq!(value["dropped"][0]["reason"], "unsupported-type");
    }
}
