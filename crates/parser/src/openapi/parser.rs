//! OpenAPI spec file parser

use super::types::OpenApiSpec;
use crate::extract;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use swagmark_common::{Endpoint, Result, SwagmarkError};

/// OpenAPI specification parser
///
/// Reads a YAML specification and exposes the parsed document together with
/// the endpoint metadata derived from it.
pub struct OpenApiParser {
    /// Loaded OpenAPI spec
    spec: OpenApiSpec,

    /// Where the spec came from, for error messages
    source: PathBuf,
}

impl OpenApiParser {
    /// Load OpenAPI spec from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = OpenApiParser::from_file("specs/petstore.yaml")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SwagmarkError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        Self::from_yaml(&content, path)
    }

    /// Parse OpenAPI spec from a YAML string
    ///
    /// `source` only labels error messages.
    pub fn from_yaml(yaml: &str, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let spec: OpenApiSpec =
            serde_yaml::from_str(yaml).map_err(|e| SwagmarkError::Parse {
                path: source.clone(),
                message: e.to_string(),
            })?;
        debug!(
            "Parsed {}: {} paths, {} operations",
            source.display(),
            spec.paths.len(),
            spec.operations().count()
        );

        Ok(Self { spec, source })
    }

    /// Endpoint descriptors in document order
    pub fn endpoints(&self) -> Vec<Endpoint> {
        extract::extract_endpoints(&self.spec)
    }

    /// Primary tag of the document, `fallback` when no operation is tagged
    pub fn primary_tag(&self, fallback: &str) -> String {
        extract::primary_tag(&self.spec, fallback)
    }

    /// Get reference to the underlying OpenAPI spec
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }

    /// Path or label the spec was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }
}
