//! Conversion orchestration: file or directory in, Markdown tree out

use crate::converter::convert_file;
use crate::index::generate_index;
use crate::renderer::{MarkdownRenderer, RenderOptions, Renderer};
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use swagmark_common::{ConversionEntry, Result, SwagmarkError};

/// Extensions recognised as specification files in directory input
const SPEC_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Options for [`convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Destination directory
    pub output: PathBuf,

    /// Template directory overriding the bundled templates
    pub template: Option<PathBuf>,

    /// Write README.md over the converted files
    pub index: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./output"),
            template: None,
            index: true,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }

    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }
}

/// Convert a specification file, or every `.yaml`/`.yml` file in a
/// directory, with the bundled Markdown renderer
///
/// # Example
/// ```rust,ignore
/// convert(Path::new("specs"), &ConvertOptions::new().output("docs/api"))?;
/// ```
pub fn convert(input: &Path, options: &ConvertOptions) -> Result<()> {
    convert_with_renderer(input, options, &MarkdownRenderer::new())
}

/// [`convert`] with any [`Renderer`]
///
/// Files are converted one at a time in name order and the first failure
/// aborts the run; pages already written stay on disk.
pub fn convert_with_renderer(
    input: &Path,
    options: &ConvertOptions,
    renderer: &dyn Renderer,
) -> Result<()> {
    let output_dir = std::path::absolute(&options.output)?;
    let template_dir = options
        .template
        .as_deref()
        .map(std::path::absolute)
        .transpose()?;

    let metadata =
        fs::metadata(input).map_err(|_| SwagmarkError::InputNotFound(input.to_path_buf()))?;

    fs::create_dir_all(&output_dir).map_err(|source| SwagmarkError::Write {
        path: output_dir.clone(),
        source,
    })?;

    let files = if metadata.is_dir() {
        discover_specs(input)?
    } else {
        vec![input.to_path_buf()]
    };
    debug!("Converting {} file(s) into {}", files.len(), output_dir.display());

    let render_options = RenderOptions::pipeline_defaults(template_dir);
    let entries = files
        .iter()
        .map(|file| convert_file(file, &output_dir, renderer, &render_options))
        .collect::<Result<Vec<ConversionEntry>>>()?;

    let with_index = options.index && !entries.is_empty();
    if with_index {
        generate_index(&entries, &output_dir)?;
    }

    println!(
        "\n{} Converted {} file(s){} to {}",
        "Done.".green().bold(),
        entries.len(),
        if with_index { " + index" } else { "" },
        output_dir.display()
    );

    Ok(())
}

/// Regular files directly inside `dir` whose names end in `.yaml` or `.yml`,
/// sorted by name
fn discover_specs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| SwagmarkError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut specs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_spec = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| SPEC_EXTENSIONS.iter().any(|ext| name.ends_with(ext)));
        if is_spec && path.is_file() {
            specs.push(path);
        }
    }

    if specs.is_empty() {
        return Err(SwagmarkError::NoYamlFiles(dir.to_path_buf()));
    }
    specs.sort();

    Ok(specs)
}
