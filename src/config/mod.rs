//! Configuration module for sbom-spdx.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use sbom_spdx::config::{AppConfig, Validatable};
//!
//! let config = AppConfig::builder()
//!     .organization("Example Corp")
//!     .namespace_base("https://example.com/spdx")
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-spdx.yaml` file in your project root or `~/.config/sbom-spdx/`:
//!
//! ```yaml
//! document:
//!   organization: Example Corp
//!   namespace_base: https://example.com/spdx
//! output:
//!   pretty: false
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_DATA_LICENSE, DEFAULT_LICENSE_LIST_VERSION, DEFAULT_NAMESPACE_BASE,
    DEFAULT_ORGANIZATION,
};
pub use types::{AppConfig, AppConfigBuilder, DocumentConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.sbom-spdx.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = value["properties"].as_object().unwrap();
        assert!(properties.contains_key("document"));
        assert!(properties.contains_key("output"));
    }
}
