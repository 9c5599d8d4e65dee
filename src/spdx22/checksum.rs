//! Checksum algorithm normalization.

use super::document::Checksum;
use crate::model::Digest;

/// Canonical SPDX spelling of a checksum algorithm name.
///
/// The SPDX 2.2 schema enumerates algorithms in upper case. Names are not
/// validated against that list; unknown names pass through upper-cased.
#[must_use]
pub fn normalize_algorithm(algorithm: &str) -> String {
    algorithm.to_uppercase()
}

/// Convert precomputed digests into SPDX checksums
#[must_use]
pub fn to_checksums(digests: &[Digest]) -> Vec<Checksum> {
    digests
        .iter()
        .map(|digest| Checksum {
            algorithm: normalize_algorithm(&digest.algorithm),
            checksum_value: digest.value.clone(),
        })
        .collect()
}
