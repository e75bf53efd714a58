//! OpenAPI 3.x / Swagger 2.0 document model
//!
//! Parses YAML specification files into [`OpenApiSpec`], keeping document
//! order for paths, methods, responses and schema properties.
//!
//! ## Usage
//! ```rust,ignore
//! use swagmark_parser::openapi::OpenApiParser;
//!
//! let parser = OpenApiParser::from_file("petstore.yaml")?;
//! let endpoints = parser.endpoints();
//! ```

mod parser;
mod types;

pub use parser::OpenApiParser;
pub use types::*;
