//! Record of what the converter left out.

use super::external_ref::ExternalRefError;
use crate::model::Relationship;
use serde::Serialize;
use std::fmt;

/// Why a relationship was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropReason {
    /// The relationship type has no SPDX 2.2 counterpart
    UnsupportedType,
    /// The from-element is a reference into another document
    ExternalFrom,
    /// The to-element is an external reference SPDX 2.2 cannot express
    IneligibleExternal,
}

impl From<&ExternalRefError> for DropReason {
    fn from(err: &ExternalRefError) -> Self {
        match err {
            ExternalRefError::FromIsExternal => Self::ExternalFrom,
            ExternalRefError::UnsupportedRelationship { .. } => Self::IneligibleExternal,
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType => write!(f, "unsupported relationship type"),
            Self::ExternalFrom => write!(f, "external reference as from-element"),
            Self::IneligibleExternal => write!(f, "ineligible external reference"),
        }
    }
}

/// A relationship absent from the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRelationship {
    pub from: String,
    pub to: String,
    pub kind: String,
    pub reason: DropReason,
}

impl DroppedRelationship {
    #[must_use]
    pub fn new(relationship: &Relationship, reason: DropReason) -> Self {
        Self {
            from: relationship.from.to_string(),
            to: relationship.to.to_string(),
            kind: relationship.kind.to_string(),
            reason,
        }
    }
}

/// Diagnostics gathered while building a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub dropped: Vec<DroppedRelationship>,
}

impl ConversionReport {
    /// Whether anything was dropped
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.dropped.is_empty()
    }

    /// Number of dropped relationships with a given reason
    #[must_use]
    pub fn count(&self, reason: DropReason) -> usize {
        self.dropped.iter().filter(|d| d.reason == reason).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, PackageId, RelationshipType};

    #[test]
    fn test_dropped_relationship_context() {
        let rel = Relationship::new(
            Endpoint::Package(PackageId::new("a")),
            Endpoint::Package(PackageId::new("b")),
            RelationshipType::EvidentBy,
        );
        let dropped = DroppedRelationship::new(&rel, DropReason::UnsupportedType);
        assert_eq!(dropped.from, "package:a");
        assert_eq!(dropped.to, "package:b");
        assert_eq!(dropped.kind, "evident-by");
    }

    #[test]
    fn test_report_counts() {
        let rel = Relationship::new(
            Endpoint::Package(PackageId::new("a")),
            Endpoint::Package(PackageId::new("b")),
            RelationshipType::EvidentBy,
        );
        let report = ConversionReport {
            dropped: vec![
                DroppedRelationship::new(&rel, DropReason::UnsupportedType),
                DroppedRelationship::new(&rel, DropReason::ExternalFrom),
            ],
        };
        assert!(report.has_warnings());
        assert_eq!(report.count(DropReason::UnsupportedType), 1);
        assert_eq!(report.count(DropReason::IneligibleExternal), 0);
        assert!(!ConversionReport::default().has_warnings());
    }

    #[test]
    fn test_reason_from_external_error() {
        assert_eq!(DropReason::from(&ExternalRefError::FromIsExternal), DropReason::ExternalFrom);
        let err = ExternalRefError::UnsupportedRelationship {
            kind: "contains".to_string(),
            algorithm: "SHA1".to_string(),
        };
        assert_eq!(DropReason::from(&err), DropReason::IneligibleExternal);
    }
}
