//! Convert command handler.
//!
//! Implements the `convert` subcommand: catalog JSON in, SPDX 2.2 JSON out.

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{
    convert_sbom, exit_codes, parse_sbom_with_context, serialize_document, write_output,
    OutputTarget,
};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Run the convert command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_convert(input: PathBuf, config: AppConfig, quiet: bool) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }

    let parsed = parse_sbom_with_context(&input, quiet)?;
    let conversion = convert_sbom(&parsed.sbom, &config.document, quiet);
    let content = serialize_document(&conversion.document, config.output.pretty)?;

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&content, &target, quiet)?;

    Ok(exit_code(config.output.fail_on_warning, conversion.report.has_warnings()))
}

const fn exit_code(fail_on_warning: bool, has_warnings: bool) -> i32 {
    if fail_on_warning && has_warnings {
        exit_codes::WARNINGS
    } else {
        exit_codes::SUCCESS
    }
}
