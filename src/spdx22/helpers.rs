//! Pass-through projections of package attributes.
//!
//! Each helper is independent and substitutes the SPDX sentinel, or nothing,
//! when the attribute is absent.

use super::document::{ExternalRef, ReferenceCategory, NOASSERTION};
use crate::model::{Originator, Package, PackageType};
use packageurl::PackageUrl;
use std::str::FromStr;

/// `downloadLocation`, which SPDX requires
#[must_use]
pub fn download_location(package: &Package) -> String {
    non_empty(package.download_location.as_deref())
        .map_or_else(|| NOASSERTION.to_string(), ToString::to_string)
}

#[must_use]
pub fn description(package: &Package) -> Option<String> {
    non_empty(package.description.as_deref()).map(ToString::to_string)
}

#[must_use]
pub fn homepage(package: &Package) -> Option<String> {
    non_empty(package.homepage.as_deref()).map(ToString::to_string)
}

/// `originator` in SPDX "<kind>: <name>" form
#[must_use]
pub fn originator(package: &Package) -> Option<String> {
    match package.originator.as_ref()? {
        Originator::Person(name) if !name.is_empty() => Some(format!("Person: {name}")),
        Originator::Organization(name) if !name.is_empty() => Some(format!("Organization: {name}")),
        _ => None,
    }
}

/// Human description of where the cataloger learned about a package type
const fn package_origin(package_type: PackageType) -> &'static str {
    match package_type {
        PackageType::Rpm => "RPM DB",
        PackageType::Apk => "APK DB",
        PackageType::Deb => "DPKG DB",
        PackageType::Npm => "installed node module manifest file",
        PackageType::Python => "installed python package manifest file",
        PackageType::JavaArchive | PackageType::JenkinsPlugin => "installed java archive",
        PackageType::Gem => "installed gem metadata file",
        PackageType::GoModule => "go module information",
        PackageType::RustCrate => "rust cargo manifest",
        PackageType::PhpComposer => "PHP composer manifest",
        PackageType::DartPub => "pubspec manifest",
        PackageType::Dotnet => "dotnet project assets file",
        PackageType::Unknown => "the following paths",
    }
}

/// `sourceInfo`: which evidence the package was derived from
#[must_use]
pub fn source_info(package: &Package) -> Option<String> {
    let origin = package_origin(package.package_type);
    let paths: Vec<&str> = package.locations.iter().map(|c| c.real_path.as_str()).collect();
    if paths.is_empty() {
        Some(format!("acquired package info from {origin}"))
    } else {
        Some(format!("acquired package info from {origin}: {}", paths.join(", ")))
    }
}

/// External references: CPEs for security tooling, the purl for package managers
#[must_use]
pub fn external_refs(package: &Package) -> Vec<ExternalRef> {
    let mut refs: Vec<ExternalRef> = package
        .cpes
        .iter()
        .filter(|cpe| !cpe.is_empty())
        .map(|cpe| ExternalRef {
            reference_category: ReferenceCategory::Security,
            reference_locator: cpe.clone(),
            reference_type: "cpe23Type".to_string(),
        })
        .collect();

    if let Some(purl) = non_empty(package.purl.as_deref()) {
        match PackageUrl::from_str(purl) {
            Ok(_) => refs.push(ExternalRef {
                reference_category: ReferenceCategory::PackageManager,
                reference_locator: purl.to_string(),
                reference_type: "purl".to_string(),
            }),
            Err(err) => {
                tracing::debug!(package = %package.id, purl, error = %err, "skipping invalid purl");
            }
        }
    }

    refs
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
