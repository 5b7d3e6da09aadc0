// Test theme directory fixtures

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative input directory the converter reads when run without a config
pub const DEFAULT_INPUT_DIR: &str = "iTerm2-Color-Schemes/vscode";
/// Relative output directory the converter writes when run without a config
pub const DEFAULT_OUTPUT_DIR: &str = "monaco_themes";

/// A temporary project laid out the way the converter expects:
/// `<root>/iTerm2-Color-Schemes/vscode/*.json` in, `<root>/monaco_themes` out
pub struct ThemeProject {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl ThemeProject {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("monaco-themes-test-")
            .tempdir()?;
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join(DEFAULT_INPUT_DIR))?;

        Ok(ThemeProject {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_INPUT_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_OUTPUT_DIR)
    }

    /// Write a raw input file
    pub fn write_input(&self, filename: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.input_dir().join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write an input theme whose color customizations are `colors`
    pub fn write_theme(&self, filename: &str, colors: &[(&str, &str)]) -> std::io::Result<PathBuf> {
        let customizations: serde_json::Map<String, serde_json::Value> = colors
            .iter()
            .map(|(key, color)| (key.to_string(), serde_json::Value::from(*color)))
            .collect();
        let document = serde_json::json!({ "workbench.colorCustomizations": customizations });
        self.write_input(filename, &document.to_string())
    }

    /// Parse a converted theme from the output directory
    pub fn read_output(&self, filename: &str) -> std::io::Result<serde_json::Value> {
        let content = fs::read_to_string(self.output_dir().join(filename))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn output_exists(&self, filename: &str) -> bool {
        self.output_dir().join(filename).exists()
    }
}

/// Names of the files in `dir`, sorted
pub fn file_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_layout() {
        let project = ThemeProject::new().unwrap();
        assert!(project.input_dir().is_dir());
        assert!(!project.output_dir().exists());
    }

    #[test]
    fn test_write_theme() {
        let project = ThemeProject::new().unwrap();
        let path = project
            .write_theme("Test.json", &[("terminal.ansiRed", "#FF0000")])
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(
            value["workbench.colorCustomizations"]["terminal.ansiRed"],
            "#FF0000"
        );
    }
}
