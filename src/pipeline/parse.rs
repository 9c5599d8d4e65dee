//! Parse stage: read a catalog file into the input model.

use crate::model::Sbom;
use crate::parsers::parse_sbom;
use anyhow::Result;
use std::path::{Path, PathBuf};

use super::PipelineError;

/// A parsed catalog together with where it came from
#[derive(Debug, Clone)]
pub struct ParsedSbom {
    pub sbom: Sbom,
    pub path: PathBuf,
}

impl ParsedSbom {
    #[must_use]
    pub fn new(sbom: Sbom, path: impl Into<PathBuf>) -> Self {
        Self {
            sbom,
            path: path.into(),
        }
    }

    /// Consume into the inner SBOM
    #[must_use]
    pub fn into_sbom(self) -> Sbom {
        self.sbom
    }
}

/// Parse a catalog file, logging progress unless quiet
pub fn parse_sbom_with_context(path: &Path, quiet: bool) -> Result<ParsedSbom> {
    if !quiet {
        tracing::info!("Parsing catalog: {:?}", path);
    }

    let sbom = parse_sbom(path).map_err(|e| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source: e.into(),
    })?;

    if !quiet {
        tracing::info!(
            "Parsed {} packages, {} file entries, {} relationships",
            sbom.package_count(),
            sbom.all_coordinates().len(),
            sbom.relationships.len()
        );
    }

    Ok(ParsedSbom::new(sbom, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_with_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"packages": [{{"id": "a", "name": "alpha"}}]}}"#).unwrap();

        let parsed = parse_sbom_with_context(file.path(), true).unwrap();
        assert_eq!(parsed.path, file.path());
        assert_eq!(parsed.into_sbom().package_count(), 1);
    }

    #[test]
    fn test_parse_failure_names_path() {
        let err =
            parse_sbom_with_context(Path::new("/nonexistent/catalog.json"), true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Parse failed"), "{message}");
        assert!(message.contains("/nonexistent/catalog.json"), "{message}");
    }
}
