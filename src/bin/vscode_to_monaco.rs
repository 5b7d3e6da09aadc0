//! Batch-convert VS Code terminal themes into Monaco themes.
//!
//! With no arguments, reads `iTerm2-Color-Schemes/vscode/*.json` and writes
//! `monaco_themes/<name>.json`. The first unreadable theme aborts the run.

use anyhow::{Context, Result};
use clap::Parser;
use monaco_themes::config::Config;
use monaco_themes::convert::convert_directory;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vscode_to_monaco")]
#[command(version, about = "Convert VS Code terminal themes to Monaco themes", long_about = None)]
struct Cli {
    /// JSON config overriding the input/output directories
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    monaco_themes::logging::init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    let converter = &config.converter;

    convert_directory(&converter.input_dir, &converter.output_dir, |input, output| {
        let name = input.file_name().unwrap_or_default().to_string_lossy();
        println!("Converted {} to {}", name, output.display());
    })
    .with_context(|| format!("Conversion of {:?} aborted", converter.input_dir))?;

    Ok(())
}
