//! Relationship records.

use super::document::Relationship as SpdxRelationship;
use super::element_id::{DocElementId, ElementId};
use super::external_ref::{validate, ExternalRefStatus};
use super::relationship_type::lookup;
use super::report::{DropReason, DroppedRelationship};
use crate::model::Relationship;

/// Converts relationships into SPDX relationship records.
///
/// Input must already be in canonical order. Relationships that cannot be
/// expressed are dropped, each with exactly one warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelationshipMapper;

impl RelationshipMapper {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Map all relationships, returning the records and what was dropped
    #[must_use]
    pub fn map_all(
        &self,
        relationships: &[Relationship],
    ) -> (Vec<SpdxRelationship>, Vec<DroppedRelationship>) {
        let mut records = Vec::with_capacity(relationships.len());
        let mut dropped = Vec::new();

        for relationship in relationships {
            match self.map_relationship(relationship) {
                Ok(record) => records.push(record),
                Err(reason) => dropped.push(DroppedRelationship::new(relationship, reason)),
            }
        }

        tracing::debug!(mapped = records.len(), dropped = dropped.len(), "mapped relationships");
        (records, dropped)
    }

    /// Map one relationship, or explain why it cannot be expressed
    pub fn map_relationship(
        &self,
        relationship: &Relationship,
    ) -> Result<SpdxRelationship, DropReason> {
        let Some(mapping) = lookup(&relationship.kind) else {
            tracing::warn!(
                from = %relationship.from,
                to = %relationship.to,
                kind = %relationship.kind,
                "unable to convert relationship to SPDX 2.2, dropping"
            );
            return Err(DropReason::UnsupportedType);
        };

        let related_spdx_element = match validate(relationship) {
            Ok(ExternalRefStatus::NotApplicable) => {
                ElementId::new(&relationship.to.id()).into_string()
            }
            Ok(ExternalRefStatus::Valid(reference)) => {
                DocElementId::new(&reference.id).into_string()
            }
            Err(err) => {
                tracing::warn!(
                    from = %relationship.from,
                    to = %relationship.to,
                    kind = %relationship.kind,
                    error = %err,
                    "dropping relationship"
                );
                return Err(DropReason::from(&err));
            }
        };

        Ok(SpdxRelationship {
            spdx_element_id: ElementId::new(&relationship.from.id()).into_string(),
            relationship_type: mapping.kind,
            related_spdx_element,
            comment: mapping.comment,
        })
    }
}
