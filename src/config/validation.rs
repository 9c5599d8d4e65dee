//! Configuration validation for sbom-spdx.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, DocumentConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.document.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for DocumentConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.organization.trim().is_empty() {
            errors.push(ConfigError::new(
                "document.organization",
                "Organization must not be empty",
            ));
        }

        if self.data_license.trim().is_empty() {
            errors.push(ConfigError::new(
                "document.data_license",
                "Data license must not be empty",
            ));
        }

        if !is_list_version(&self.license_list_version) {
            errors.push(ConfigError::new(
                "document.license_list_version",
                format!(
                    "License list version must look like '3.20', got '{}'",
                    self.license_list_version
                ),
            ));
        }

        let base = self.namespace_base.as_str();
        let scheme_ok = base.starts_with("https://") || base.starts_with("http://");
        let host_ok = base.split("://").nth(1).is_some_and(|rest| !rest.is_empty());
        if !scheme_ok || !host_ok {
            errors.push(ConfigError::new(
                "document.namespace_base",
                format!("Namespace base must be an http(s) URI, got '{base}'"),
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(parent) = self.file.as_ref().and_then(|file| file.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

/// `<major>.<minor>` with both parts numeric
fn is_list_version(version: &str) -> bool {
    let mut parts = version.split('.');
    let numeric = |part: Option<&str>| {
        part.is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    };
    numeric(parts.next()) && numeric(parts.next()) && parts.next().is_none()
}
