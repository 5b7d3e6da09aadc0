//! Terminal to editor color mapping
//!
//! Monaco has no terminal panel, so only the handful of terminal colors that
//! have a direct editor counterpart are carried over.

use indexmap::IndexMap;

use crate::theme::ColorCustomizations;

/// Editor color key -> `#`-prefixed hex color, in insertion order
pub type EditorColors = IndexMap<String, String>;

/// Terminal key -> editor key, in output order
pub const TERMINAL_TO_EDITOR: &[(&str, &str)] = &[
    ("terminal.foreground", "editor.foreground"),
    ("terminal.background", "editor.background"),
    ("terminal.selectionBackground", "editor.selectionBackground"),
    ("terminalCursor.foreground", "editorCursor.foreground"),
];

/// Editor colors that are always present, with the value used when unmapped
pub const EDITOR_DEFAULTS: &[(&str, &str)] = &[
    ("editor.lineHighlightBackground", "#00000012"),
    ("editorWhitespace.foreground", "#BFBFBF"),
];

/// Map terminal colors to Monaco editor colors.
///
/// Missing terminal keys are skipped. The defaulted keys are filled in last.
pub fn map_terminal_to_editor_colors(customizations: &ColorCustomizations) -> EditorColors {
    let mut colors = EditorColors::new();

    for (terminal_key, editor_key) in TERMINAL_TO_EDITOR {
        if let Some(color) = customizations.get(terminal_key) {
            colors.insert(editor_key.to_string(), with_hash(color));
        }
    }

    for (editor_key, default) in EDITOR_DEFAULTS {
        if !colors.contains_key(*editor_key) {
            colors.insert(editor_key.to_string(), default.to_string());
        }
    }

    colors
}

fn with_hash(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{}", color)
    }
}
