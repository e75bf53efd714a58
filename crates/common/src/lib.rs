//! Common types and utilities for swagmark
//!
//! This crate contains shared data structures, error types, and the fixed
//! HTTP method badge tables used across the parser, generator, and CLI
//! components.

mod method;

pub use method::{HttpMethod, BADGE_BASE_URL};

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting specifications
#[derive(Error, Debug)]
pub enum SwagmarkError {
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("No YAML files found in directory: {}", .0.display())]
    NoYamlFiles(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for swagmark operations
pub type Result<T> = std::result::Result<T, SwagmarkError>;

/// One HTTP method on one path, with display metadata for badges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Uppercased method name (e.g. "GET")
    pub method: String,

    /// Path template as written in the document
    pub path: String,

    /// Operation summary, empty when absent
    pub summary: String,

    /// Badge color keyed by method
    pub color: &'static str,

    /// Badge glyph keyed by method
    pub glyph: &'static str,
}

impl Endpoint {
    /// Build an endpoint descriptor for `method` on `path`
    pub fn new(method: HttpMethod, path: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            method: method.upper().to_string(),
            path: path.into(),
            summary: summary.into(),
            color: method.badge_color(),
            glyph: method.badge_glyph(),
        }
    }

    /// Badge image URL for this endpoint
    pub fn badge_url(&self) -> String {
        format!(
            "{}/{}/{}?label=&corner_radius=5",
            BADGE_BASE_URL, self.method, self.color
        )
    }

    /// Markdown image rendering of the badge (`![glyph METHOD](url)`)
    pub fn badge_markdown(&self) -> String {
        format!("![{} {}]({})", self.glyph, self.method, self.badge_url())
    }
}

/// Per-input-file metadata used to build the aggregate index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionEntry {
    /// Output base name (input file name without extension)
    pub name: String,

    /// Grouping label shown as the section heading in the index
    pub tag: String,

    /// Endpoints in document order
    pub endpoints: Vec<Endpoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_badge_url() {
        let endpoint = Endpoint::new(HttpMethod::Get, "/pets", "List pets");
        assert_eq!(endpoint.method, "GET");
        assert_eq!(
            endpoint.badge_url(),
            "https://badgers.space/badge/_/GET/blue?label=&corner_radius=5"
        );
        assert_eq!(
            endpoint.badge_markdown(),
            "![🔵 GET](https://badgers.space/badge/_/GET/blue?label=&corner_radius=5)"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SwagmarkError::NoYamlFiles(PathBuf::from("specs"));
        assert_eq!(err.to_string(), "No YAML files found in directory: specs");

        let err = SwagmarkError::InputNotFound(PathBuf::from("missing.yaml"));
        assert_eq!(err.to_string(), "Input not found: missing.yaml");
    }
}
