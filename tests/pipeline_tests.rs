//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full parse → convert → write pipeline, error
//! handling paths, and CLI command handlers with real fixture files.

use sbom_spdx::cli::{run_convert, run_inspect, InspectSummary};
use sbom_spdx::config::{AppConfig, DocumentConfig};
use sbom_spdx::pipeline::{
    convert_sbom, exit_codes, parse_sbom_with_context, serialize_document, write_output,
    OutputTarget,
};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

// ============================================================================
// Pipeline Parse Stage Tests
// ============================================================================

mod parse_stage {
    use super::*;

    #[test]
    fn parse_catalog_fixture() {
        let parsed = parse_sbom_with_context(&fixture_path("catalog/minimal.json"), true)
            .expect("parse should succeed");
        assert_eq!(parsed.sbom.package_count(), 2);
        assert_eq!(parsed.sbom.relationships.len(), 3);
    }

    #[test]
    fn parse_missing_file_fails() {
        let result = parse_sbom_with_context(Path::new("/nonexistent/catalog.json"), true);
        assert!(result.is_err());
    }

    #[test]
    fn parse_spdx_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("already.spdx.json");
        std::fs::write(
            &path,
            r#"{"spdxVersion": "SPDX-2.2", "SPDXID": "SPDXRef-DOCUMENT"}"#,
        )
        .unwrap();

        let err = parse_sbom_with_context(&path, true).unwrap_err();
        assert!(format!("{err:#}").contains("already a SPDX document"), "{err:#}");
    }
}

// ============================================================================
// Convert Stage Tests
// ============================================================================

mod convert_stage {
    use super::*;

    #[test]
    fn convert_and_serialize_fixture() {
        let parsed =
            parse_sbom_with_context(&fixture_path("catalog/image-with-layers.json"), true).unwrap();
        let conversion = convert_sbom(&parsed.sbom, &DocumentConfig::default(), true);
        assert_eq!(conversion.report.dropped.len(), 1);

        let json = serialize_document(&conversion.document, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "registry.example.com/app-2.0");
        assert_eq!(value["packages"].as_array().unwrap().len(), 3);
        assert_eq!(value["files"].as_array().unwrap().len(), 3);
        assert_eq!(value["relationships"].as_array().unwrap().len(), 4);
    }
}

// ============================================================================
// Output Stage Tests
// ============================================================================

mod output_stage {
    use super::*;

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.spdx.json");
        write_output("{\"a\": 1}", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{\"a\": 1}");
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    #[test]
    fn convert_writes_spdx_document() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("alpine.spdx.json");
        let config = AppConfig::builder()
            .organization("Example Corp")
            .output_file(Some(output.clone()))
            .pretty(false)
            .build();

        let code = run_convert(fixture_path("catalog/minimal.json"), config, true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let content = std::fs::read_to_string(output).unwrap();
        assert!(!content.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["creationInfo"]["creators"][0], "Organization: Example Corp");
    }

    #[test]
    fn convert_fail_on_warning_reports_drops() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::builder()
            .output_file(Some(dir.path().join("out.json")))
            .fail_on_warning(true)
            .build();

        let code =
            run_convert(fixture_path("catalog/with-external-ref.json"), config, true).unwrap();
        assert_eq!(code, exit_codes::WARNINGS);
    }

    #[test]
    fn convert_clean_catalog_with_fail_on_warning_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::builder()
            .output_file(Some(dir.path().join("out.json")))
            .fail_on_warning(true)
            .build();

        let code = run_convert(fixture_path("catalog/minimal.json"), config, true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn convert_missing_input_is_error() {
        let config = AppConfig::default();
        assert!(run_convert(PathBuf::from("/nonexistent.json"), config, true).is_err());
    }

    #[test]
    fn inspect_runs_on_fixture() {
        run_inspect(
            fixture_path("catalog/with-external-ref.json"),
            DocumentConfig::default(),
            true,
            true,
        )
        .unwrap();
    }

    #[test]
    fn inspect_summary_for_fixture() {
        let parsed =
            parse_sbom_with_context(&fixture_path("catalog/with-external-ref.json"), true).unwrap();
        let conversion = convert_sbom(&parsed.sbom, &DocumentConfig::default(), true);
        let summary = InspectSummary::from_conversion(&conversion);
        assert_eq!(summary.packages, 1);
        assert_eq!(summary.external_document_refs, 1);
        assert_eq!(summary.dropped.len(), 2);
        assert!(summary.to_text().contains("ineligible external reference: 1"));
    }
}
