#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_spdx::spdx22::DocumentBuilder;

/// Fuzz conversion of every catalog that parses.
///
/// Conversion never fails, so any panic here is a bug.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(sbom) = sbom_spdx::parsers::parse_sbom_str(s) {
            let document = DocumentBuilder::default().build(&sbom);
            let _ = serde_json::to_string(&document);
        }
    }
});
