//! Top-level SPDX 2.2 document assembly.

use super::document::{CreationInfo, Document, SPDX_VERSION};
use super::element_id::ElementId;
use super::external_ref::external_document_refs;
use super::files::FileMapper;
use super::license::{LicenseList, SpdxLicenseList};
use super::namespace::{document_name, document_namespace};
use super::packages::PackageMapper;
use super::relationships::RelationshipMapper;
use super::report::ConversionReport;
use crate::config::DocumentConfig;
use crate::model::Sbom;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// When and as what a document is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationContext {
    pub created: DateTime<Utc>,
    /// Makes the document namespace unique
    pub document_uuid: Uuid,
}

impl CreationContext {
    #[must_use]
    pub const fn new(created: DateTime<Utc>, document_uuid: Uuid) -> Self {
        Self {
            created,
            document_uuid,
        }
    }

    /// Current time and a fresh random UUID
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now(), Uuid::new_v4())
    }
}

/// Builds SPDX 2.2 documents from SBOM aggregates.
///
/// Building never fails. Relationships SPDX 2.2 cannot express are dropped
/// and listed in the [`ConversionReport`].
pub struct DocumentBuilder {
    config: DocumentConfig,
    licenses: Box<dyn LicenseList + Send + Sync>,
}

impl DocumentBuilder {
    /// Builder using the bundled license list at the configured version
    #[must_use]
    pub fn new(config: DocumentConfig) -> Self {
        let licenses = SpdxLicenseList::new(config.license_list_version.clone());
        Self {
            config,
            licenses: Box::new(licenses),
        }
    }

    /// Replace the license list
    #[must_use]
    pub fn with_license_list(mut self, licenses: impl LicenseList + Send + Sync + 'static) -> Self {
        self.licenses = Box::new(licenses);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Build a document stamped with the current time
    #[must_use]
    pub fn build(&self, sbom: &Sbom) -> Document {
        self.build_with_report(sbom).0
    }

    /// Build a document stamped with the current time, plus diagnostics
    #[must_use]
    pub fn build_with_report(&self, sbom: &Sbom) -> (Document, ConversionReport) {
        self.build_at(sbom, CreationContext::now())
    }

    /// Build a document for an explicit creation context
    #[must_use]
    pub fn build_at(&self, sbom: &Sbom, context: CreationContext) -> (Document, ConversionReport) {
        // One canonical ordering shared by every relationship-derived projection
        let relationships = sbom.relationships_sorted();

        let name = document_name(&sbom.source, &context.document_uuid);
        let namespace = document_namespace(
            &self.config.namespace_base,
            &sbom.source,
            &name,
            &context.document_uuid,
        );

        let packages = PackageMapper::new(self.licenses.as_ref())
            .map_catalog(&sbom.artifacts.packages, &relationships);
        let files = FileMapper::new().map_all(sbom);
        let (relationship_records, dropped) = RelationshipMapper::new().map_all(&relationships);
        let external_refs = external_document_refs(&relationships);

        tracing::debug!(
            packages = packages.len(),
            files = files.len(),
            relationships = relationship_records.len(),
            external_refs = external_refs.len(),
            "built SPDX document"
        );

        let document = Document {
            spdx_id: ElementId::document().into_string(),
            name,
            spdx_version: SPDX_VERSION.to_string(),
            creation_info: CreationInfo {
                created: context.created,
                creators: vec![
                    format!("Organization: {}", self.config.organization),
                    format!("Tool: {}", sbom.descriptor.tool()),
                ],
                license_list_version: self.licenses.version().to_string(),
            },
            data_license: self.config.data_license.clone(),
            document_namespace: namespace,
            external_document_refs: external_refs,
            packages,
            files,
            relationships: relationship_records,
        };

        (document, ConversionReport { dropped })
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}

impl std::fmt::Debug for DocumentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentBuilder")
            .field("config", &self.config)
            .field("license_list_version", &self.licenses.version())
            .finish()
    }
}
