//! Swagmark CLI
//!
//! Converts OpenAPI YAML files into Markdown API reference pages.

use anyhow::Result;
use clap::Parser;
use colored::*;
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::process;
use swagmark_generator::{convert, ConvertOptions};

#[derive(Parser)]
#[command(name = "swagmark")]
#[command(
    version,
    about = "Convert OpenAPI YAML specifications into Markdown API docs",
    long_about = None,
    after_help = "EXAMPLES:\n  \
        # Convert one spec into ./output\n  \
        swagmark petstore.yaml\n\n  \
        # Convert a directory of specs without README.md\n  \
        swagmark specs/ -o docs/api --no-index\n\n  \
        # Use custom templates\n  \
        swagmark specs/ -t ./templates"
)]
struct Cli {
    /// OpenAPI YAML file or directory of YAML files
    input: PathBuf,

    /// Output directory
    #[arg(short, long, env = "SWAGMARK_OUTPUT", default_value = "./output")]
    output: PathBuf,

    /// Directory of *.tera templates overriding the bundled ones
    #[arg(short, long, env = "SWAGMARK_TEMPLATE")]
    template: Option<PathBuf>,

    /// Do not write README.md
    #[arg(long)]
    no_index: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    println!("{} Converting {}", "→".cyan(), cli.input.display());

    let options = ConvertOptions::new()
        .output(cli.output)
        .template(cli.template)
        .index(!cli.no_index);
    debug!("Options: {:?}", options);

    convert(&cli.input, &options)?;
    Ok(())
}
