//! Pipeline orchestration for conversion runs.
//!
//! This module provides the shared parse → convert → write stages used by
//! the CLI command handlers.

mod convert;
mod output;
mod parse;

pub use convert::{convert_sbom, serialize_document, Conversion};
pub use output::{write_output, OutputTarget};
pub use parse::{parse_sbom_with_context, ParsedSbom};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse the input catalog
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Failed to encode the SPDX document
    #[error("Serialization failed: {source}")]
    SerializeFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Writing the document failed
    #[error("Output failed: {source}")]
    OutputFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Document written with every relationship represented
    pub const SUCCESS: i32 = 0;
    /// Document written but relationships were dropped (with --fail-on-warning)
    pub const WARNINGS: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
