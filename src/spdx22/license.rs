//! License list lookups and package license expressions.

use super::document::NONE;
use super::element_id::unique_idstring;
use crate::model::Package;

/// Source of SPDX license identifiers.
///
/// The converter never judges whether a license applies; it only asks
/// whether a string names a known license so it can be written in canonical
/// form.
pub trait LicenseList {
    /// License list version recorded in the document's creation info
    fn version(&self) -> &str;

    /// Canonical identifier for a license name, if the list knows it
    fn canonical_id(&self, license: &str) -> Option<String>;

    /// Whether a string is already a well-formed SPDX license expression
    fn is_expression(&self, license: &str) -> bool {
        spdx::Expression::parse(license).is_ok()
    }
}

/// License list backed by the identifiers compiled into the `spdx` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpdxLicenseList {
    version: String,
}

impl SpdxLicenseList {
    /// Create a list reporting the given version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl LicenseList for SpdxLicenseList {
    fn version(&self) -> &str {
        &self.version
    }

    fn canonical_id(&self, license: &str) -> Option<String> {
        let trimmed = license.trim();
        if let Some(id) = spdx::license_id(trimmed) {
            return Some(id.name.to_string());
        }
        // Accept case and punctuation variants ("apache 2.0") only when the
        // whole string was consumed by the match.
        match spdx::imprecise_license_id(trimmed) {
            Some((id, consumed)) if consumed == trimmed.len() => Some(id.name.to_string()),
            _ => None,
        }
    }
}

/// Render a single license value for SPDX output.
#[must_use]
pub fn license_value(license: &str, list: &dyn LicenseList) -> String {
    if let Some(id) = list.canonical_id(license) {
        return id;
    }
    let trimmed = license.trim();
    if list.is_expression(trimmed) {
        if trimmed.contains(char::is_whitespace) {
            format!("({trimmed})")
        } else {
            trimmed.to_string()
        }
    } else {
        format!("LicenseRef-{}", unique_idstring(trimmed))
    }
}

/// License expression for a package, used for both concluded and declared
/// license fields.
///
/// Returns `NONE` when the package carries no license information.
#[must_use]
pub fn package_license(package: &Package, list: &dyn LicenseList) -> String {
    let values: Vec<String> = package
        .licenses
        .iter()
        .filter(|license| !license.trim().is_empty())
        .map(|license| license_value(license, list))
        .collect();

    if values.is_empty() {
        NONE.to_string()
    } else {
        values.join(" AND ")
    }
}
