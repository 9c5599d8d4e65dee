//! Configuration types for sbom-spdx operations.
//!
//! Provides structured configuration for the document header and for how
//! converted documents are written.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Document header settings (creator, licenses, namespace)
    pub document: DocumentConfig,
    /// Output settings (destination, formatting, warnings)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the organization named in the document creators.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.config.document.organization = organization.into();
        self
    }

    /// Set the base URI for document namespaces.
    pub fn namespace_base(mut self, base: impl Into<String>) -> Self {
        self.config.document.namespace_base = base.into();
        self
    }

    /// Set the license list version recorded in documents.
    pub fn license_list_version(mut self, version: impl Into<String>) -> Self {
        self.config.document.license_list_version = version.into();
        self
    }

    /// Set the output file path.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Enable or disable pretty-printed JSON.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Exit with a distinct code when relationships were dropped.
    pub const fn fail_on_warning(mut self, fail: bool) -> Self {
        self.config.output.fail_on_warning = fail;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Document Configuration
// ============================================================================

/// Settings that end up in every generated document header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DocumentConfig {
    /// Organization listed as document creator
    pub organization: String,
    /// License of the document itself
    pub data_license: String,
    /// SPDX license list version recorded in creation info
    pub license_list_version: String,
    /// Base URI that document namespaces are built under
    pub namespace_base: String,
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Where and how converted documents are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Exit with code 2 when any relationship was dropped
    pub fail_on_warning: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .organization("Example Corp")
            .namespace_base("https://example.com/spdx")
            .output_file(Some(PathBuf::from("out.spdx.json")))
            .pretty(false)
            .fail_on_warning(true)
            .build();

        assert_eq!(config.document.organization, "Example Corp");
        assert_eq!(config.document.namespace_base, "https://example.com/spdx");
        assert_eq!(config.output.file, Some(PathBuf::from("out.spdx.json")));
        assert!(!config.output.pretty);
        assert!(config.output.fail_on_warning);
        // Untouched fields keep their defaults
        assert_eq!(config.document.data_license, "CC0-1.0");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("document:\n  organization: Acme\n").unwrap();
        assert_eq!(config.document.organization, "Acme");
        assert_eq!(config.document.license_list_version, "3.20");
        assert!(config.output.pretty);
    }
}
