//! Specification parsing for swagmark
//!
//! This crate turns OpenAPI 3.x and Swagger 2.0 YAML documents into an
//! in-memory model ([`openapi::OpenApiSpec`]) and derives the lightweight
//! metadata the index page needs:
//!
//! - endpoint descriptors (method, path, summary, badge color and glyph)
//! - the primary tag, used as the document's section heading

mod extract;
pub mod openapi;

pub use extract::{extract_endpoints, primary_tag};
pub use openapi::{OpenApiParser, OpenApiSpec};
