//! Property-based tests for the converter.
//!
//! Checks invariants that must hold for arbitrary input: checksum
//! normalization, output order stability, classifier totality and
//! identifier character set.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use sbom_spdx::model::{
    Coordinates, Digest, Endpoint, FileMetadata, Package, PackageId, Relationship,
    RelationshipType, Sbom,
};
use sbom_spdx::parsers::parse_sbom_str;
use sbom_spdx::spdx22::{
    classify, to_checksums, CreationContext, Document, DocumentBuilder, ElementId,
};
use uuid::Uuid;

fn context() -> CreationContext {
    CreationContext::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), Uuid::nil())
}

fn kind_strategy() -> impl Strategy<Value = RelationshipType> {
    prop_oneof![
        Just(RelationshipType::Contains),
        Just(RelationshipType::DependencyOf),
        Just(RelationshipType::OwnershipByFileOverlap),
        Just(RelationshipType::EvidentBy),
    ]
}

/// Packages as (name, version) pairs; ids are assigned by position
fn packages_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("(alpha|beta|gamma)", "[0-9]\\.[0-9]"), 1..8)
}

fn build(
    packages: &[(usize, String, String)],
    relationships: &[Relationship],
    files: &[String],
) -> Document {
    let mut sbom = Sbom::default();
    for (index, name, version) in packages {
        sbom.artifacts
            .packages
            .add(Package::new(format!("p{index}"), name.clone(), version.clone()));
    }
    for path in files {
        sbom.artifacts
            .file_metadata
            .insert(Coordinates::new(path.clone()), FileMetadata::with_mime_type("text/plain"));
    }
    sbom.relationships = relationships.to_vec();
    DocumentBuilder::default().build_at(&sbom, context()).0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn checksum_algorithms_are_uppercase(
        algorithm in "[a-zA-Z0-9-]{1,12}",
        value in "[0-9a-f]{0,64}",
    ) {
        let checksums = to_checksums(&[Digest::new(algorithm.clone(), value.clone())]);
        prop_assert_eq!(checksums.len(), 1);
        prop_assert_eq!(&checksums[0].algorithm, &algorithm.to_uppercase());
        prop_assert_eq!(&checksums[0].checksum_value, &value);
    }

    #[test]
    fn classifier_is_total(mime in "\\PC{0,40}") {
        let types = classify(Some(&FileMetadata::with_mime_type(mime)));
        prop_assert!(!types.is_empty());
    }

    #[test]
    fn element_ids_use_spdx_charset(identity in "\\PC{0,40}") {
        let id = ElementId::new(&identity);
        let suffix = id.as_str().strip_prefix("SPDXRef-").unwrap();
        prop_assert!(!suffix.is_empty());
        prop_assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-'));
    }

    #[test]
    fn output_order_is_independent_of_input_order(
        (packages, shuffled_packages) in packages_strategy().prop_flat_map(|packages| {
            let indexed: Vec<(usize, String, String)> = packages
                .into_iter()
                .enumerate()
                .map(|(i, (name, version))| (i, name, version))
                .collect();
            (Just(indexed.clone()), Just(indexed).prop_shuffle())
        }),
        edges in prop::collection::vec(
            (0usize..8, 0usize..8, kind_strategy(), any::<bool>()),
            0..12,
        ),
        files in prop::collection::vec("/(bin|lib|etc)/[a-z]{1,6}", 0..6),
        seed in any::<u64>(),
    ) {
        let count = packages.len();
        let relationships: Vec<Relationship> = edges
            .iter()
            .enumerate()
            .map(|(n, (from, to, kind, to_file))| {
                let from = Endpoint::Package(PackageId::new(format!("p{}", from % count)));
                let to = if *to_file {
                    Endpoint::File(Coordinates::new(format!("/usr/lib/f{n}")))
                } else {
                    Endpoint::Package(PackageId::new(format!("p{}", to % count)))
                };
                Relationship::new(from, to, kind.clone())
            })
            .collect();

        // Deterministic rotation of relationships and files stands in for a shuffle
        let mut rotated_relationships = relationships.clone();
        let mut rotated_files = files.clone();
        if !rotated_relationships.is_empty() {
            let by = usize::try_from(seed % rotated_relationships.len() as u64).unwrap();
            rotated_relationships.rotate_left(by);
        }
        rotated_files.reverse();

        let first = build(&packages, &relationships, &files);
        let second = build(&shuffled_packages, &rotated_relationships, &rotated_files);

        prop_assert_eq!(&first.packages, &second.packages);
        prop_assert_eq!(&first.files, &second.files);
        prop_assert_eq!(&first.relationships, &second.relationships);
        prop_assert_eq!(&first.external_document_refs, &second.external_document_refs);
    }

    #[test]
    fn parse_sbom_str_doesnt_panic(s in "\\PC{0,500}") {
        let _ = parse_sbom_str(&s);
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{"packages": \[[^\]]{0,200}\]\}"#).unwrap()
    ) {
        let _ = parse_sbom_str(&s);
    }
}

#[test]
fn classifier_without_metadata_is_empty() {
    assert!(classify(None).is_empty());
}
