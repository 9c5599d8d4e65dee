//! Default values for sbom-spdx configuration.

use super::types::{DocumentConfig, OutputConfig};

/// Organization named in document creators
pub const DEFAULT_ORGANIZATION: &str = "Binarly.io";

/// License of generated documents, as SPDX requires
pub const DEFAULT_DATA_LICENSE: &str = "CC0-1.0";

/// SPDX license list version recorded in creation info
pub const DEFAULT_LICENSE_LIST_VERSION: &str = "3.20";

/// Base URI for document namespaces
pub const DEFAULT_NAMESPACE_BASE: &str = "https://binarly.io/sbom-spdx";

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            data_license: DEFAULT_DATA_LICENSE.to_string(),
            license_list_version: DEFAULT_LICENSE_LIST_VERSION.to_string(),
            namespace_base: DEFAULT_NAMESPACE_BASE.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: None,
            pretty: true,
            fail_on_warning: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_defaults() {
        let config = DocumentConfig::default();
        assert_eq!(config.organization, "Binarly.io");
        assert_eq!(config.data_license, "CC0-1.0");
        assert_eq!(config.namespace_base, DEFAULT_NAMESPACE_BASE);
    }

    #[test]
    fn test_output_defaults() {
        let config = OutputConfig::default();
        assert!(config.file.is_none());
        assert!(config.pretty);
        assert!(!config.fail_on_warning);
    }
}
