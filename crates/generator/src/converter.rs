//! Single file conversion: YAML in, Markdown page out

use crate::postprocess::postprocess;
use crate::renderer::{RenderOptions, Renderer};
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::Path;
use swagmark_common::{ConversionEntry, Result, SwagmarkError};
use swagmark_parser::OpenApiParser;

/// Convert one specification file into `<output_dir>/<name>.md`
///
/// `name` is the file name without its extension. Returns the entry the
/// index page is built from.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    renderer: &dyn Renderer,
    options: &RenderOptions,
) -> Result<ConversionEntry> {
    let name = base_name(input);
    debug!("Converting {} as {}", input.display(), name);

    let parser = OpenApiParser::from_file(input)?;
    let endpoints = parser.endpoints();
    let tag = parser.primary_tag(&name);
    debug!("{}: {} endpoints, primary tag '{}'", name, endpoints.len(), tag);

    let rendered = renderer.render(parser.spec(), options)?;
    let markdown = postprocess(&rendered);

    let output = output_dir.join(format!("{}.md", name));
    fs::write(&output, &markdown).map_err(|source| SwagmarkError::Write {
        path: output.clone(),
        source,
    })?;
    println!(
        "{} {}.md ({} lines)",
        "✓".green(),
        name,
        markdown.split('\n').count()
    );

    Ok(ConversionEntry {
        name,
        tag,
        endpoints,
    })
}

fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
