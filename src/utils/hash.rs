//! Content hashing utilities.

use xxhash_rust::xxh3::xxh3_64;

/// Compute a content hash for arbitrary bytes
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Render the low 32 bits of a content hash as 8 lowercase hex digits.
///
/// Used as a disambiguating suffix when an identifier had to be rewritten.
pub fn short_hash(data: &[u8]) -> String {
    format!("{:08x}", content_hash(data) & 0xffff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash() {
        let data = b"hello world";
        let hash = content_hash(data);
        assert_ne!(hash, 0);

        // Same input should produce same hash
        assert_eq!(hash, content_hash(data));

        // Different input should produce different hash
        assert_ne!(hash, content_hash(b"hello world!"));
    }

    #[test]
    fn test_short_hash_is_fixed_width() {
        let short = short_hash(b"pkg:npm/lodash");
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(short, short_hash(b"pkg:npm/lodash"));
    }
}
