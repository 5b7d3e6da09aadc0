use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::colors::{map_terminal_to_editor_colors, EditorColors};
use crate::rules::{create_syntax_rules, SyntaxRule};

/// Terminal color customizations as found under `workbench.colorCustomizations`.
///
/// Keys keep their document order. Values are usually hex strings, but VS Code
/// also allows nested objects (per-theme overrides); those are kept around and
/// simply never match a lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorCustomizations(IndexMap<String, serde_json::Value>);

impl ColorCustomizations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a color by key. Non-string values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_json::Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.0.insert(key.into(), serde_json::Value::String(color.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorCustomizations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut customizations = Self::new();
        for (key, color) in iter {
            customizations.insert(key, color);
        }
        customizations
    }
}

/// Serializable VS Code theme document (matches JSON structure)
///
/// Only the color customization section matters; every other key is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VsCodeTheme {
    #[serde(rename = "workbench.colorCustomizations", default)]
    pub color_customizations: ColorCustomizations,
}

impl VsCodeTheme {
    /// Load a VS Code theme from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Monaco base style a converted theme inherits from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseTheme {
    #[serde(rename = "vs-dark")]
    Dark,
    #[serde(rename = "vs")]
    Light,
}

impl BaseTheme {
    /// Pick the base style from the source path: anything mentioning "dark"
    /// (case-insensitive, anywhere in the path) is dark.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let lowered = path.as_ref().to_string_lossy().to_lowercase();
        if lowered.contains("dark") {
            BaseTheme::Dark
        } else {
            BaseTheme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseTheme::Dark => "vs-dark",
            BaseTheme::Light => "vs",
        }
    }
}

/// A Monaco editor theme, serialized as `{base, inherit, rules, colors}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonacoTheme {
    pub base: BaseTheme,
    pub inherit: bool,
    pub rules: Vec<SyntaxRule>,
    pub colors: EditorColors,
}

impl MonacoTheme {
    /// Build a Monaco theme from terminal color customizations
    pub fn from_customizations(base: BaseTheme, customizations: &ColorCustomizations) -> Self {
        Self {
            base,
            inherit: true,
            rules: create_syntax_rules(customizations),
            colors: map_terminal_to_editor_colors(customizations),
        }
    }

    /// Serialize with two-space indentation
    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(ThemeError::Serialize)
    }

    /// Save theme to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let contents = self.to_json()?;
        std::fs::write(path, contents).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Where the converted form of `input` goes: `<output_dir>/<input stem>.json`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut file_name = stem.to_os_string();
    file_name.push(".json");
    output_dir.join(file_name)
}

/// Theme loading/writing error types
#[derive(Debug)]
pub enum ThemeError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Io { path, source } => write!(f, "IO error on {:?}: {}", path, source),
            ThemeError::Parse { path, source } => {
                write!(f, "Parse error in {:?}: {}", path, source)
            }
            ThemeError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Io { source, .. } => Some(source),
            ThemeError::Parse { source, .. } => Some(source),
            ThemeError::Serialize(e) => Some(e),
        }
    }
}
