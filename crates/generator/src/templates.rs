//! Template loading and management

use crate::context::slugify;
use log::debug;
use std::collections::HashMap;
use std::error::Error as _;
use std::fs;
use std::path::Path;
use swagmark_common::{Result, SwagmarkError};
use tera::{Tera, Value};

/// Entry point template
pub const MAIN_TEMPLATE: &str = "main.md";

/// Extension of template files in a user template directory
const TEMPLATE_EXTENSION: &str = "tera";

/// Templates embedded in the binary, by name
const BUNDLED: &[(&str, &str)] = &[
    ("main.md", include_str!("../templates/openapi3/main.md.tera")),
    ("operation.md", include_str!("../templates/openapi3/operation.md.tera")),
    ("code_shell.md", include_str!("../templates/openapi3/code_shell.md.tera")),
    ("parameters.md", include_str!("../templates/openapi3/parameters.md.tera")),
    ("responses.md", include_str!("../templates/openapi3/responses.md.tera")),
    ("schema.md", include_str!("../templates/openapi3/schema.md.tera")),
];

/// Load the bundled templates, with overrides and extra partials from
/// `user_dir` when given
///
/// `<dir>/<name>.tera` replaces the bundled template `<name>`; any other
/// `*.tera` file is added under its own name minus the extension.
pub fn load_templates(user_dir: Option<&Path>) -> Result<Tera> {
    let mut sources: Vec<(String, String)> = BUNDLED
        .iter()
        .map(|(name, body)| (name.to_string(), body.to_string()))
        .collect();

    if let Some(dir) = user_dir {
        for (name, body) in read_template_dir(dir)? {
            match sources.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => {
                    debug!("Template {} overridden from {}", name, dir.display());
                    slot.1 = body;
                }
                None => {
                    debug!("Extra template {} from {}", name, dir.display());
                    sources.push((name, body));
                }
            }
        }
    }

    let mut tera = Tera::default();
    tera.register_filter("cell", cell_filter);
    tera.register_filter("anchor", anchor_filter);
    tera.add_raw_templates(sources)
        .map_err(|e| SwagmarkError::Render(format!("Failed to load templates: {}", describe_error(&e))))?;

    Ok(tera)
}

/// `(name, body)` for every `*.tera` file directly inside `dir`, sorted by name
fn read_template_dir(dir: &Path) -> Result<Vec<(String, String)>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        SwagmarkError::Render(format!(
            "Template directory {} is not readable: {}",
            dir.display(),
            e
        ))
    })?;

    let mut templates = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let body = fs::read_to_string(&path).map_err(|source| SwagmarkError::Read {
            path: path.clone(),
            source,
        })?;
        templates.push((name.to_string(), body));
    }
    templates.sort();

    Ok(templates)
}

/// Tera errors keep the useful part (which variable, which line) in their
/// source chain
pub fn describe_error(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Filter making text safe inside a Markdown table cell
fn cell_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    let escaped = text
        .replace('|', "\\|")
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Value::String(escaped))
}

/// Filter turning a heading into an HTML id
fn anchor_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("anchor filter expects a string"))?;

    Ok(Value::String(slugify(s)))
}
