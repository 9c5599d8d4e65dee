//! Input model: the cataloged SBOM graph.
//!
//! This module defines the read-only aggregate that format converters
//! consume: a package catalog, per-file metadata and digests, a
//! relationship list with polymorphic endpoints, and the source/producer
//! descriptors.
//!
//! ```
//! use sbom_spdx::model::{Coordinates, Endpoint, Package, Relationship, RelationshipType, Sbom};
//!
//! let mut sbom = Sbom::default();
//! let package = Package::new("pkg1", "alpha", "1.0");
//! sbom.relationships.push(Relationship::new(
//!     Endpoint::Package(package.id.clone()),
//!     Endpoint::File(Coordinates::new("/usr/bin/alpha")),
//!     RelationshipType::Contains,
//! ));
//! sbom.artifacts.packages.add(package);
//!
//! assert_eq!(sbom.all_coordinates().len(), 1);
//! ```

mod file;
mod package;
mod relationship;
mod sbom;
mod source;

pub use file::*;
pub use package::*;
pub use relationship::*;
pub use sbom::*;
pub use source::*;
