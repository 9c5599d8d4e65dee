//! Package records.

use super::checksum::to_checksums;
use super::document::Package as SpdxPackage;
use super::element_id::ElementId;
use super::helpers;
use super::license::{package_license, LicenseList};
use crate::model::{Package, PackageCatalog, Relationship, RelationshipType};
use std::collections::HashMap;

/// File ids each package contains, keyed by package element id.
///
/// Built from the canonically sorted relationship list so the per-package
/// order matches the document's relationship order.
#[derive(Debug, Default)]
pub struct HasFilesIndex {
    files: HashMap<ElementId, Vec<String>>,
}

impl HasFilesIndex {
    /// Index every `contains` relationship from a package to a file
    #[must_use]
    pub fn from_relationships(relationships: &[Relationship]) -> Self {
        let mut files: HashMap<ElementId, Vec<String>> = HashMap::new();
        for relationship in relationships {
            if relationship.kind != RelationshipType::Contains {
                continue;
            }
            let (Some(package), Some(file)) =
                (relationship.from.as_package(), relationship.to.as_file())
            else {
                continue;
            };
            files
                .entry(ElementId::new(package.as_str()))
                .or_default()
                .push(ElementId::new(&file.id()).into_string());
        }
        Self { files }
    }

    /// File ids for a package, in sorted relationship order
    #[must_use]
    pub fn files_for(&self, package_id: &ElementId) -> &[String] {
        self.files.get(package_id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Converts cataloged packages into SPDX package records.
pub struct PackageMapper<'a> {
    licenses: &'a dyn LicenseList,
}

impl<'a> PackageMapper<'a> {
    #[must_use]
    pub fn new(licenses: &'a dyn LicenseList) -> Self {
        Self { licenses }
    }

    /// Map the whole catalog in its canonical order
    #[must_use]
    pub fn map_catalog(
        &self,
        catalog: &PackageCatalog,
        relationships: &[Relationship],
    ) -> Vec<SpdxPackage> {
        let has_files = HasFilesIndex::from_relationships(relationships);
        catalog
            .sorted()
            .into_iter()
            .map(|package| self.map_package(package, &has_files))
            .collect()
    }

    /// Map a single package
    #[must_use]
    pub fn map_package(&self, package: &Package, has_files: &HasFilesIndex) -> SpdxPackage {
        let spdx_id = ElementId::new(package.id.as_str());
        let license = package_license(package, self.licenses);
        // Only archive digests are trusted enough to claim the files were analyzed
        let checksums = to_checksums(package.archive_digests());
        let files_analyzed = !checksums.is_empty();

        SpdxPackage {
            has_files: has_files.files_for(&spdx_id).to_vec(),
            spdx_id: spdx_id.into_string(),
            name: package.name.clone(),
            version_info: package.version.clone(),
            license_concluded: license.clone(),
            license_declared: license,
            download_location: helpers::download_location(package),
            files_analyzed,
            checksums,
            external_refs: helpers::external_refs(package),
            description: helpers::description(package),
            homepage: helpers::homepage(package),
            originator: helpers::originator(package),
            source_info: helpers::source_info(package),
        }
    }
}
