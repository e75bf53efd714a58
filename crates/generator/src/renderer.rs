//! OpenAPI to Markdown rendering
//!
//! The conversion pipeline only sees the [`Renderer`] trait: a parsed
//! document plus [`RenderOptions`] in, Markdown text out.

use crate::context::ContextBuilder;
use crate::templates;
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;
use swagmark_common::{Result, SwagmarkError};
use swagmark_parser::OpenApiSpec;

/// Code sample languages the bundled templates know how to write
const SUPPORTED_LANGUAGES: &[&str] = &["shell"];

/// A code-sample language tab (`shell` labelled "Shell")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTab {
    pub language: String,
    pub label: String,
}

impl LanguageTab {
    pub fn new(language: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            label: label.into(),
        }
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    /// Languages to write code samples in
    pub language_tabs: Vec<LanguageTab>,

    /// Write code samples at all
    pub code_samples: bool,

    /// Leave out the YAML front matter
    pub omit_header: bool,

    /// List the request body's top-level properties in the parameters table
    pub expand_body: bool,

    /// Only list top-level properties in schema tables
    pub shallow_schemas: bool,

    /// Directory whose `*.tera` files override the bundled templates
    pub user_templates: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language_tabs: vec![LanguageTab::new("shell", "Shell")],
            code_samples: true,
            omit_header: false,
            expand_body: false,
            shallow_schemas: false,
            user_templates: None,
        }
    }
}

impl RenderOptions {
    /// The fixed configuration the conversion pipeline renders with
    pub fn pipeline_defaults(user_templates: Option<PathBuf>) -> Self {
        Self {
            language_tabs: vec![LanguageTab::new("shell", "Shell")],
            code_samples: true,
            omit_header: true,
            expand_body: true,
            shallow_schemas: false,
            user_templates,
        }
    }

    /// Whether a code sample language was requested
    pub fn has_language(&self, language: &str) -> bool {
        self.language_tabs.iter().any(|tab| tab.language == language)
    }
}

/// Turns a parsed specification into Markdown
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    fn render(&self, spec: &OpenApiSpec, options: &RenderOptions) -> Result<String>;
}

/// Template-driven Markdown renderer
///
/// Templates are loaded for every call so each document honours the
/// `user_templates` of its own options.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, spec: &OpenApiSpec, options: &RenderOptions) -> Result<String> {
        check_supported(spec)?;
        for tab in &options.language_tabs {
            if !SUPPORTED_LANGUAGES.contains(&tab.language.as_str()) {
                warn!("No code sample template for language '{}'", tab.language);
            }
        }

        let tera = templates::load_templates(options.user_templates.as_deref())?;
        let document = ContextBuilder::new(spec, options).build();
        debug!(
            "Rendering '{}': {} groups, {} schemas",
            document.title,
            document.groups.len(),
            document.schemas.len()
        );

        let mut context = tera::Context::new();
        context.insert("doc", &document);
        context.insert("groups", &document.groups);
        context.insert("schemas", &document.schemas);
        context.insert("options", options);
        context.insert("generator_version", env!("CARGO_PKG_VERSION"));

        let rendered = tera
            .render(templates::MAIN_TEMPLATE, &context)
            .map_err(|e| SwagmarkError::Render(templates::describe_error(&e)))?;

        Ok(collapse_blank_lines(&rendered))
    }
}

/// Reject documents that are neither OpenAPI 3.x nor Swagger 2.0
fn check_supported(spec: &OpenApiSpec) -> Result<()> {
    match (spec.openapi.as_deref(), spec.swagger.as_deref()) {
        (Some(version), _) if version.starts_with('3') => Ok(()),
        (None, Some(version)) if version.starts_with('2') => Ok(()),
        (Some(version), _) | (None, Some(version)) => Err(SwagmarkError::Render(format!(
            "Unsupported specification version: {}",
            version
        ))),
        (None, None) => Err(SwagmarkError::Render(
            "Document has neither an 'openapi' nor a 'swagger' version field".to_string(),
        )),
    }
}

/// Templates leave runs of empty lines behind skipped blocks; keep at most one
fn collapse_blank_lines(text: &str) -> String {
    static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();
    let pattern = BLANK_RUNS
        .get_or_init(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid regex"));
    pattern.replace_all(text, "\n\n").into_owned()
}
