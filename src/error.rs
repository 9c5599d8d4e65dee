//! Unified error types for sbom-spdx.
//!
//! This module provides the error hierarchy for the library, with context
//! chains for debugging and user-friendly messages. Conversion itself is
//! infallible; errors arise only around it (reading input, loading
//! configuration, writing output).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-spdx operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomSpdxError {
    /// Errors while reading the input SBOM
    #[error("Failed to parse SBOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: crate::parsers::ParseError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Errors while encoding the output document
    #[error("Failed to serialize document: {context}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-spdx operations
pub type Result<T> = std::result::Result<T, SbomSpdxError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SbomSpdxError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: crate::parsers::ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialize(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialize {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SbomSpdxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<crate::parsers::ParseError> for SbomSpdxError {
    fn from(err: crate::parsers::ParseError) -> Self {
        Self::parse("", err)
    }
}

impl From<serde_json::Error> for SbomSpdxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialize("", err)
    }
}

impl From<crate::config::ConfigFileError> for SbomSpdxError {
    fn from(err: crate::config::ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, creating
/// a chain that shows the path through the code.
///
/// # Example
///
/// ```
/// use sbom_spdx::error::{ErrorContext, Result};
/// use sbom_spdx::parsers::parse_sbom_str;
///
/// fn load(content: &str) -> Result<usize> {
///     let sbom = parse_sbom_str(content).context("reading catalog")?;
///     Ok(sbom.package_count())
/// }
///
/// let err = load("not json").unwrap_err();
/// assert!(err.to_string().contains("reading catalog"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomSpdxError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SbomSpdxError, new_ctx: &str) -> SbomSpdxError {
    match err {
        SbomSpdxError::Parse {
            context: existing,
            source,
        } => SbomSpdxError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomSpdxError::Io { path, message, source } => SbomSpdxError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomSpdxError::Serialize {
            context: existing,
            source,
        } => SbomSpdxError::Serialize {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomSpdxError::Config(msg) => SbomSpdxError::Config(chain_context(new_ctx, &msg)),
        SbomSpdxError::Validation(msg) => SbomSpdxError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
