//! Admissibility of cross-document references.
//!
//! SPDX 2.2 can only express a reference into another document as the
//! target of a `DESCRIBED_BY` relationship whose external checksum is SHA1.

use super::checksum::normalize_algorithm;
use super::document::{Checksum, ExternalDocumentRef as SpdxExternalDocumentRef};
use super::element_id::DocElementId;
use crate::model::{ExternalDocumentRef, Relationship, RelationshipType};
use thiserror::Error;

/// Checksum algorithm SPDX 2.2 requires for external document references
pub const REQUIRED_ALGORITHM: &str = "SHA1";

/// Why an external reference cannot be encoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExternalRefError {
    #[error("an external reference cannot be the from-element of a relationship")]
    FromIsExternal,

    #[error(
        "cannot encode an external reference with relationship type {kind} \
         (checksum algorithm {algorithm})"
    )]
    UnsupportedRelationship { kind: String, algorithm: String },
}

/// How a relationship relates to external documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalRefStatus<'a> {
    /// Neither endpoint is external
    NotApplicable,
    /// The to-element is an admissible external reference
    Valid(&'a ExternalDocumentRef),
}

/// Decide whether a relationship's external endpoints are admissible.
pub fn validate(relationship: &Relationship) -> Result<ExternalRefStatus<'_>, ExternalRefError> {
    if relationship.from.is_external_reference() {
        return Err(ExternalRefError::FromIsExternal);
    }

    let Some(reference) = relationship.to.as_external_reference() else {
        return Ok(ExternalRefStatus::NotApplicable);
    };

    let algorithm = normalize_algorithm(&reference.checksum.algorithm);
    if relationship.kind == RelationshipType::DescribedBy && algorithm == REQUIRED_ALGORITHM {
        Ok(ExternalRefStatus::Valid(reference))
    } else {
        Err(ExternalRefError::UnsupportedRelationship {
            kind: relationship.kind.to_string(),
            algorithm,
        })
    }
}

/// Render an admissible external reference as an SPDX document reference
#[must_use]
pub fn to_document_ref(reference: &ExternalDocumentRef) -> SpdxExternalDocumentRef {
    SpdxExternalDocumentRef {
        external_document_id: DocElementId::new(&reference.id).into_string(),
        checksum: Checksum {
            algorithm: normalize_algorithm(&reference.checksum.algorithm),
            checksum_value: reference.checksum.value.clone(),
        },
        spdx_document: reference.uri.clone(),
    }
}

/// Collect one document reference per admissible external relationship.
///
/// Inadmissible relationships are skipped here; reporting them is left to
/// the relationship mapper so each drop is reported exactly once.
#[must_use]
pub fn external_document_refs(relationships: &[Relationship]) -> Vec<SpdxExternalDocumentRef> {
    relationships
        .iter()
        .filter_map(|relationship| match validate(relationship) {
            Ok(ExternalRefStatus::Valid(reference)) => Some(to_document_ref(reference)),
            Ok(ExternalRefStatus::NotApplicable) | Err(_) => None,
        })
        .collect()
}
