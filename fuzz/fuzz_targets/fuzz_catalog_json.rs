#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the catalog JSON entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_sbom_str`, which runs format
/// detection, rejects exchange-format documents and parses catalogs.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_spdx::parsers::parse_sbom_str(s);
    }
});
