//! The SBOM aggregate handed to format converters.

use super::{
    Coordinates, Descriptor, Digest, FileMetadata, PackageCatalog, Relationship, SourceMetadata,
};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;

/// Cataloging results: packages and per-file facts.
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    /// All cataloged packages
    pub packages: PackageCatalog,
    /// MIME and related metadata, keyed by file location
    pub file_metadata: IndexMap<Coordinates, FileMetadata>,
    /// Precomputed digests, keyed by file location
    pub file_digests: IndexMap<Coordinates, Vec<Digest>>,
    /// Every location the cataloger listed, with or without metadata
    pub listed_files: IndexSet<Coordinates>,
}

/// A complete, read-only SBOM graph.
///
/// Converters never mutate the aggregate; every projection is computed
/// from shared references.
#[derive(Debug, Clone, Default)]
pub struct Sbom {
    pub artifacts: Artifacts,
    pub relationships: Vec<Relationship>,
    pub source: SourceMetadata,
    pub descriptor: Descriptor,
}

impl Sbom {
    /// Create an empty SBOM for the given source and producer
    #[must_use]
    pub fn new(source: SourceMetadata, descriptor: Descriptor) -> Self {
        Self {
            artifacts: Artifacts::default(),
            relationships: Vec::new(),
            source,
            descriptor,
        }
    }

    /// Relationships in canonical order.
    ///
    /// Sorted by `from` id, then `to` id, then relationship label. Ties are
    /// broken on the full endpoints, so the result does not depend on input
    /// order. Every projection that depends on relationship order must consume
    /// this one sorted sequence.
    #[must_use]
    pub fn relationships_sorted(&self) -> Vec<Relationship> {
        let mut keyed: Vec<_> = self
            .relationships
            .iter()
            .map(|r| ((r.from.id(), r.to.id(), r.kind.as_str().to_string()), r))
            .collect();
        keyed.sort_by(|(a_key, a), (b_key, b)| a_key.cmp(b_key).then_with(|| a.cmp(b)));
        keyed.into_iter().map(|(_, r)| r.clone()).collect()
    }

    /// Every file location referenced anywhere in the SBOM, deduplicated and ordered.
    ///
    /// Includes listed files, metadata keys, digest keys and file endpoints of
    /// relationships.
    /// Package locations alone do not make a file part of the document.
    #[must_use]
    pub fn all_coordinates(&self) -> Vec<Coordinates> {
        let mut set: BTreeSet<&Coordinates> = BTreeSet::new();
        set.extend(&self.artifacts.listed_files);
        set.extend(self.artifacts.file_metadata.keys());
        set.extend(self.artifacts.file_digests.keys());
        for relationship in &self.relationships {
            set.extend(relationship.from.as_file());
            set.extend(relationship.to.as_file());
        }
        set.into_iter().cloned().collect()
    }

    /// Metadata for a file location, if cataloged
    #[must_use]
    pub fn file_metadata(&self, coordinates: &Coordinates) -> Option<&FileMetadata> {
        self.artifacts.file_metadata.get(coordinates)
    }

    /// Digests for a file location, empty if none were computed
    #[must_use]
    pub fn file_digests(&self, coordinates: &Coordinates) -> &[Digest] {
        self.artifacts
            .file_digests
            .get(coordinates)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of cataloged packages
    #[must_use]
    pub fn package_count(&self) -> usize {
        self.artifacts.packages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, Package, PackageId, RelationshipType};

    fn contains(from: &str, path: &str) -> Relationship {
        Relationship::new(
            Endpoint::Package(PackageId::new(from)),
            Endpoint::File(Coordinates::new(path)),
            RelationshipType::Contains,
        )
    }

    #[test]
    fn test_relationships_sorted_is_order_independent() {
        let mut a = Sbom::default();
        a.relationships = vec![contains("p2", "/b"), contains("p1", "/a"), contains("p1", "/c")];

        let mut b = Sbom::default();
        b.relationships = vec![contains("p1", "/c"), contains("p2", "/b"), contains("p1", "/a")];

        assert_eq!(a.relationships_sorted(), b.relationships_sorted());
        assert!(a.relationships_sorted()[0].from.id() == "p1");
    }

    #[test]
    fn test_relationships_sorted_keeps_duplicates() {
        let mut sbom = Sbom::default();
        sbom.relationships = vec![contains("p1", "/a"), contains("p1", "/a")];
        assert_eq!(sbom.relationships_sorted().len(), 2);
    }

    #[test]
    fn test_relationships_sorted_by_kind_last() {
        let from = Endpoint::Package(PackageId::new("p1"));
        let to = Endpoint::Package(PackageId::new("p2"));
        let mut sbom = Sbom::default();
        sbom.relationships = vec![
            Relationship::new(from.clone(), to.clone(), RelationshipType::OwnershipByFileOverlap),
            Relationship::new(from, to, RelationshipType::DependencyOf),
        ];
        let sorted = sbom.relationships_sorted();
        assert_eq!(sorted[0].kind, RelationshipType::DependencyOf);
    }

    #[test]
    fn test_relationships_sorted_breaks_ties_on_endpoint_payload() {
        use crate::model::ExternalDocumentRef;

        let described_by = |uri: &str| {
            Relationship::new(
                Endpoint::Package(PackageId::new("p1")),
                Endpoint::External(ExternalDocumentRef {
                    id: "base".to_string(),
                    checksum: Digest::new("sha1", "abc"),
                    uri: uri.to_string(),
                }),
                RelationshipType::DescribedBy,
            )
        };

        let mut a = Sbom::default();
        a.relationships = vec![described_by("https://x/1"), described_by("https://x/2")];
        let mut b = Sbom::default();
        b.relationships = vec![described_by("https://x/2"), described_by("https://x/1")];

        assert_eq!(a.relationships_sorted(), b.relationships_sorted());
    }

    #[test]
    fn test_all_coordinates_includes_listed_files() {
        let mut sbom = Sbom::default();
        sbom.artifacts.listed_files.insert(Coordinates::new("/etc/listed"));
        assert_eq!(sbom.all_coordinates(), vec![Coordinates::new("/etc/listed")]);
    }

    #[test]
    fn test_all_coordinates_collects_every_source() {
        let mut sbom = Sbom::default();
        sbom.artifacts
            .file_metadata
            .insert(Coordinates::new("/meta"), FileMetadata::with_mime_type("text/plain"));
        sbom.artifacts
            .file_digests
            .insert(Coordinates::new("/digest"), vec![Digest::new("sha256", "00")]);
        sbom.artifacts
            .file_digests
            .insert(Coordinates::new("/meta"), vec![Digest::new("sha256", "11")]);
        sbom.relationships.push(contains("p1", "/rel"));

        let mut located = Package::new("p1", "alpha", "1.0");
        located.locations.push(Coordinates::new("/only-a-location"));
        sbom.artifacts.packages.add(located);

        let paths: Vec<String> = sbom.all_coordinates().into_iter().map(|c| c.real_path).collect();
        assert_eq!(paths, vec!["/digest", "/meta", "/rel"]);
    }

    #[test]
    fn test_file_digests_default_empty() {
        let sbom = Sbom::default();
        assert!(sbom.file_digests(&Coordinates::new("/missing")).is_empty());
        assert!(sbom.file_metadata(&Coordinates::new("/missing")).is_none());
    }
}
