//! Markdown generation for OpenAPI specifications
//!
//! This crate renders parsed specifications into Markdown pages, cleans them
//! up, writes them next to an index page and drives the whole conversion of a
//! file or directory.

mod context;
mod converter;
mod index;
mod pipeline;
mod postprocess;
mod renderer;
mod sample;
mod status;
mod templates;

pub use converter::convert_file;
pub use index::{generate_index, render_index, INDEX_FILE};
pub use pipeline::{convert, convert_with_renderer, ConvertOptions};
pub use postprocess::{postprocess, LINT_DIRECTIVE};
pub use renderer::{LanguageTab, MarkdownRenderer, RenderOptions, Renderer};
