//! README.md index over every converted file

use colored::Colorize;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use swagmark_common::{ConversionEntry, Result, SwagmarkError};

/// File name of the index page
pub const INDEX_FILE: &str = "README.md";

/// Index page text: a summary line, then one section per entry listing its
/// endpoints with method badges
pub fn render_index(entries: &[ConversionEntry]) -> String {
    let endpoint_count: usize = entries.iter().map(|e| e.endpoints.len()).sum();

    let mut lines = vec![
        "# API Reference".to_string(),
        String::new(),
        format!("> {} sections / {} endpoints", entries.len(), endpoint_count),
        String::new(),
    ];

    for entry in entries {
        lines.push(format!("## [{}](./{}.md)", entry.tag, entry.name));
        lines.push(String::new());
        for endpoint in &entry.endpoints {
            let line = format!(
                "- {} `{}` — {}",
                endpoint.badge_markdown(),
                endpoint.path,
                endpoint.summary
            );
            // An empty summary leaves `— ` behind; markdownlint flags trailing spaces
            lines.push(line.trim_end().to_string());
        }
        lines.push(String::new());
    }

    let mut content = lines.join("\n");
    content.truncate(content.trim_end().len());
    content.push('\n');
    content
}

/// Write the index page to `<output_dir>/README.md`
pub fn generate_index(entries: &[ConversionEntry], output_dir: &Path) -> Result<PathBuf> {
    let content = render_index(entries);
    let path = output_dir.join(INDEX_FILE);
    debug!("Writing index of {} entries to {}", entries.len(), path.display());

    fs::write(&path, &content).map_err(|source| SwagmarkError::Write {
        path: path.clone(),
        source,
    })?;
    println!(
        "{} {} ({} lines, {} sections)",
        "✓".green(),
        INDEX_FILE,
        content.split('\n').count(),
        entries.len()
    );

    Ok(path)
}
