//! VS Code -> Monaco conversion pipeline
//!
//! One file at a time, strictly in order. The first failure stops the batch;
//! files already written stay on disk.

use std::path::{Path, PathBuf};

use crate::theme::{output_path_for, BaseTheme, MonacoTheme, ThemeError, VsCodeTheme};

/// Convert a single VS Code theme file and return the path it was written to
pub fn convert_vscode_to_monaco(input: &Path, output_dir: &Path) -> Result<PathBuf, ThemeError> {
    let vscode_theme = VsCodeTheme::from_file(input)?;
    let base = BaseTheme::from_path(input);
    let monaco_theme = MonacoTheme::from_customizations(base, &vscode_theme.color_customizations);

    let output_path = output_path_for(input, output_dir);
    monaco_theme.save_to_file(&output_path)?;

    tracing::info!(
        "Converted {:?} ({}, {} rules, {} colors)",
        input,
        base.as_str(),
        monaco_theme.rules.len(),
        monaco_theme.colors.len()
    );

    Ok(output_path)
}

/// List the `.json` entries of `dir`, sorted by file name
pub fn list_theme_files(dir: &Path) -> Result<Vec<PathBuf>, ThemeError> {
    let io_err = |source| ThemeError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_name = entry.file_name();
        if file_name.to_string_lossy().ends_with(".json") {
            files.push(entry.path());
        } else {
            tracing::debug!("Skipping non-theme entry {:?}", file_name);
        }
    }
    files.sort();

    Ok(files)
}

/// Convert every `.json` theme in `input_dir` into `output_dir`.
///
/// `on_converted` is called with `(input, output)` after each file is written.
/// Returns the written paths, or the first error.
pub fn convert_directory<F>(
    input_dir: &Path,
    output_dir: &Path,
    mut on_converted: F,
) -> Result<Vec<PathBuf>, ThemeError>
where
    F: FnMut(&Path, &Path),
{
    std::fs::create_dir_all(output_dir).map_err(|source| ThemeError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let inputs = list_theme_files(input_dir)?;
    tracing::info!("Found {} themes in {:?}", inputs.len(), input_dir);

    let mut written = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let output = convert_vscode_to_monaco(input, output_dir).inspect_err(|e| {
            tracing::error!("Aborting batch at {:?}: {}", input, e);
        })?;
        on_converted(input, &output);
        written.push(output);
    }

    Ok(written)
}
