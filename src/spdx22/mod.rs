//! SPDX 2.2 JSON conversion.
//!
//! Converts a cataloged [`Sbom`](crate::model::Sbom) into an SPDX 2.2
//! [`Document`] ready for JSON serialization.
//!
//! Conversion is a pure function of its input. The relationship list is
//! sorted once and that single ordering feeds the package `hasFiles` lists,
//! the relationship records and the external document references, so the
//! three always agree. Packages and files are emitted in their own canonical
//! orders, making output stable across runs for the same logical input.
//!
//! ```
//! use sbom_spdx::model::{Coordinates, Endpoint, Package, Relationship, RelationshipType, Sbom};
//! use sbom_spdx::spdx22::DocumentBuilder;
//!
//! let mut sbom = Sbom::default();
//! let mut package = Package::new("pkg1", "alpha", "1.0");
//! package.licenses.push("MIT".to_string());
//! sbom.relationships.push(Relationship::new(
//!     Endpoint::Package(package.id.clone()),
//!     Endpoint::File(Coordinates::new("/usr/bin/alpha")),
//!     RelationshipType::Contains,
//! ));
//! sbom.artifacts.packages.add(package);
//!
//! let document = DocumentBuilder::default().build(&sbom);
//! assert_eq!(document.packages[0].license_declared, "MIT");
//! assert_eq!(document.files[0].license_concluded, "NOASSERTION");
//! ```

mod builder;
mod checksum;
mod document;
mod element_id;
mod external_ref;
mod file_type;
mod files;
pub mod helpers;
mod license;
mod namespace;
mod packages;
mod relationship_type;
mod relationships;
mod report;

pub use builder::{CreationContext, DocumentBuilder};
pub use checksum::{normalize_algorithm, to_checksums};
pub use document::{
    Checksum, CreationInfo, Document, ExternalDocumentRef, ExternalRef, File, Package,
    ReferenceCategory, Relationship, NOASSERTION, NONE, SPDX_VERSION,
};
pub use element_id::{sanitize, DocElementId, ElementId, DOCUMENT_ID};
pub use external_ref::{
    external_document_refs, validate, ExternalRefError, ExternalRefStatus, REQUIRED_ALGORITHM,
};
pub use file_type::{
    classify, is_archive, is_executable, FileType, ARCHIVE_MIME_TYPES, EXECUTABLE_MIME_TYPES,
};
pub use files::FileMapper;
pub use license::{license_value, package_license, LicenseList, SpdxLicenseList};
pub use namespace::{clean_name, clean_path, document_name, document_namespace};
pub use packages::{HasFilesIndex, PackageMapper};
pub use relationship_type::{
    lookup as lookup_relationship_type, RelationshipMapping, SpdxRelationshipType,
};
pub use relationships::RelationshipMapper;
pub use report::{ConversionReport, DropReason, DroppedRelationship};
