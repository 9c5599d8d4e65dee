//! File records.

use super::checksum::to_checksums;
use super::document::{File as SpdxFile, NOASSERTION};
use super::element_id::ElementId;
use super::file_type::classify;
use crate::model::{Coordinates, Sbom};

/// Converts file locations into SPDX file records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileMapper;

impl FileMapper {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Map every coordinate referenced in the SBOM.
    ///
    /// Output is sorted by file name, then SPDX id, so files that share a
    /// path across layers still come out in a fixed order.
    #[must_use]
    pub fn map_all(&self, sbom: &Sbom) -> Vec<SpdxFile> {
        let mut files: Vec<SpdxFile> = sbom
            .all_coordinates()
            .iter()
            .map(|coordinates| self.map_file(sbom, coordinates))
            .collect();

        files.sort_by(|a, b| {
            a.file_name
                .cmp(&b.file_name)
                .then_with(|| a.spdx_id.cmp(&b.spdx_id))
        });
        files
    }

    /// Map one coordinate
    #[must_use]
    pub fn map_file(&self, sbom: &Sbom, coordinates: &Coordinates) -> SpdxFile {
        SpdxFile {
            spdx_id: ElementId::new(&coordinates.id()).into_string(),
            file_name: coordinates.real_path.clone(),
            // File-level licensing is never inferred
            license_concluded: NOASSERTION.to_string(),
            checksums: to_checksums(sbom.file_digests(coordinates)),
            file_types: classify(sbom.file_metadata(coordinates)),
            comment: coordinates.layer_id().map(|layer| format!("layerID: {layer}")),
        }
    }
}
