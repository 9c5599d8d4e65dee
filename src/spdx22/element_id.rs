//! SPDX element identifiers.
//!
//! SPDX restricts identifier strings to `[A-Za-z0-9.-]`. Identities that
//! already conform are used verbatim; anything else is rewritten and given a
//! short hash suffix of the original, so two distinct inputs never render
//! to the same identifier.

use crate::utils::short_hash;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

/// Identifier of the document element itself
pub const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";

const ELEMENT_PREFIX: &str = "SPDXRef-";
const DOCUMENT_REF_PREFIX: &str = "DocumentRef-";

fn invalid_chars() -> &'static Regex {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    INVALID.get_or_init(|| Regex::new(r"[^A-Za-z0-9.\-]").expect("static regex is valid"))
}

/// Replace every character SPDX does not allow in identifiers with `-`.
#[must_use]
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    invalid_chars().replace_all(raw, "-")
}

/// Sanitize and, when anything was rewritten, append a disambiguating suffix.
pub(crate) fn unique_idstring(raw: &str) -> String {
    match sanitize(raw) {
        Cow::Borrowed(clean) if !clean.is_empty() => clean.to_string(),
        rewritten => format!("{}-{}", rewritten, short_hash(raw.as_bytes())),
    }
}

/// An element defined in the present document (`SPDXRef-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Element id for an entity identity
    #[must_use]
    pub fn new(identity: &str) -> Self {
        Self(format!("{ELEMENT_PREFIX}{}", unique_idstring(identity)))
    }

    /// The document's own element id
    #[must_use]
    pub fn document() -> Self {
        Self(DOCUMENT_ID.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document-qualified reference to another SPDX document (`DocumentRef-…`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocElementId(String);

impl DocElementId {
    /// Document reference id for an external reference identity
    #[must_use]
    pub fn new(identity: &str) -> Self {
        Self(format!("{DOCUMENT_REF_PREFIX}{}", unique_idstring(identity)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DocElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identity_is_verbatim() {
        assert_eq!(ElementId::new("pkg1").as_str(), "SPDXRef-pkg1");
        assert_eq!(ElementId::new("a1b2.c3-d4").as_str(), "SPDXRef-a1b2.c3-d4");
        assert_eq!(DocElementId::new("alpine-3.18").as_str(), "DocumentRef-alpine-3.18");
    }

    #[test]
    fn test_invalid_chars_are_rewritten_with_suffix() {
        let id = ElementId::new("pkg:npm/lodash@4.17.21");
        let rendered = id.as_str();
        assert!(rendered.starts_with("SPDXRef-pkg-npm-lodash-4.17.21-"), "{rendered}");
        assert!(rendered
            .trim_start_matches(ELEMENT_PREFIX)
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-'));
    }

    #[test]
    fn test_rewritten_ids_do_not_collide() {
        // Both sanitize to "a-b"
        let underscore = ElementId::new("a_b");
        let slash = ElementId::new("a/b");
        let plain = ElementId::new("a-b");
        assert_ne!(underscore, slash);
        assert_ne!(underscore, plain);
        assert_ne!(slash, plain);
    }

    #[test]
    fn test_empty_identity_still_renders() {
        let id = ElementId::new("");
        assert!(id.as_str().len() > ELEMENT_PREFIX.len());
    }

    #[test]
    fn test_document_id() {
        assert_eq!(ElementId::document().as_str(), DOCUMENT_ID);
    }
}
