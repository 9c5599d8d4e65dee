//! Mapping from internal relationship kinds to SPDX 2.2 relationship types.

use crate::model::RelationshipType;
use serde::{Deserialize, Serialize};

/// SPDX 2.2 relationship types this converter emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpdxRelationshipType {
    Contains,
    DependencyOf,
    DescribedBy,
    Other,
}

const OWNERSHIP_BY_FILE_OVERLAP_COMMENT: &str = "indicates that the parent package claims \
    ownership of a child package since the parent metadata indicates overlap with a location \
    that a cataloger found the child package by";

/// Supported kinds: (internal label, SPDX type, explanatory comment)
const RELATIONSHIP_TABLE: &[(&str, SpdxRelationshipType, Option<&str>)] = &[
    ("contains", SpdxRelationshipType::Contains, None),
    (
        "ownership-by-file-overlap",
        SpdxRelationshipType::Other,
        Some(OWNERSHIP_BY_FILE_OVERLAP_COMMENT),
    ),
    ("dependency-of", SpdxRelationshipType::DependencyOf, None),
    ("described-by", SpdxRelationshipType::DescribedBy, None),
];

/// How an internal relationship kind is rendered in SPDX
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipMapping {
    pub kind: SpdxRelationshipType,
    /// Free-text comment, prefixed with the internal label
    pub comment: Option<String>,
}

/// Look up the SPDX rendering of a relationship kind.
///
/// Returns `None` for kinds SPDX 2.2 output does not support.
#[must_use]
pub fn lookup(kind: &RelationshipType) -> Option<RelationshipMapping> {
    let label = kind.as_str();
    RELATIONSHIP_TABLE
        .iter()
        .find(|(internal, _, _)| *internal == label)
        .map(|(_, spdx_kind, comment)| RelationshipMapping {
            kind: *spdx_kind,
            comment: comment.map(|text| format!("{label}: {text}")),
        })
}
