//! Syntax highlighting rules derived from ANSI terminal colors
//!
//! Terminal themes only define sixteen ANSI colors, so each one is spread
//! over a family of TextMate-style tokens. Output order is fixed by
//! [`ANSI_TOKENS`] and [`EXTRA_TOKENS`], never by the input document.

use serde::{Deserialize, Serialize};

use crate::theme::ColorCustomizations;

/// A Monaco token color rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxRule {
    /// Hex color without the leading `#`
    pub foreground: String,
    pub token: String,
}

impl SyntaxRule {
    pub fn new(color: &str, token: &str) -> Self {
        Self {
            foreground: color.trim_start_matches('#').to_string(),
            token: token.to_string(),
        }
    }
}

/// ANSI key -> tokens it colors
pub const ANSI_TOKENS: &[(&str, &[&str])] = &[
    // Basic syntax elements
    (
        "terminal.ansiRed",
        &[
            "keyword",
            "storage",
            "storage.type",
            "keyword.control",
            "keyword.operator",
            // Type system
            "keyword.type",
            "keyword.interface",
            "keyword.class",
            "keyword.enum",
            // Language-specific keywords
            "keyword.import",
            "keyword.package",
            "keyword.namespace",
            "keyword.using",
        ],
    ),
    (
        "terminal.ansiGreen",
        &[
            "string",
            "string.quoted",
            "string.quoted.single",
            "string.quoted.double",
            "string.quoted.triple",
            "string.template",
            "string.regexp",
            "string.quoted.raw",
            "string.quoted.docstring",
        ],
    ),
    (
        "terminal.ansiYellow",
        &["comment", "comment.line", "comment.block", "comment.documentation"],
    ),
    (
        "terminal.ansiBlue",
        &[
            "variable",
            "variable.parameter",
            "variable.other",
            "variable.other.property",
            "variable.other.object",
            "variable.other.constant",
        ],
    ),
    (
        "terminal.ansiMagenta",
        &[
            "entity.name.function",
            "entity.name.method",
            "entity.name.class",
            "entity.name.type",
            "entity.name.tag",
            "entity.other.attribute-name",
        ],
    ),
    (
        "terminal.ansiCyan",
        &[
            "constant",
            "constant.numeric",
            "constant.language",
            "constant.character",
            "constant.other",
            "constant.numeric.integer",
            "constant.numeric.float",
            "constant.numeric.hex",
        ],
    ),
    (
        "terminal.ansiWhite",
        &[
            "text",
            "text.plain",
            "text.xml",
            "text.html",
            "text.css",
            "text.javascript",
        ],
    ),
    // Bright variants for emphasis
    (
        "terminal.ansiBrightRed",
        &["invalid", "invalid.illegal", "invalid.deprecated"],
    ),
    (
        "terminal.ansiBrightGreen",
        &[
            "string.regexp",
            "string.quoted.regexp",
            "string.quoted.regexp.heredoc",
        ],
    ),
    (
        "terminal.ansiBrightYellow",
        &[
            "markup.heading",
            "markup.underline",
            "markup.underline.link",
            "markup.bold",
            "markup.italic",
        ],
    ),
    (
        "terminal.ansiBrightBlue",
        &[
            "support",
            "support.function",
            "support.class",
            "support.type",
            "support.constant",
        ],
    ),
    (
        "terminal.ansiBrightMagenta",
        &[
            "entity.name.namespace",
            "entity.name.scope-resolution",
            "entity.name.label",
        ],
    ),
    (
        "terminal.ansiBrightCyan",
        &[
            "constant.character.escape",
            "constant.character.entity",
            "constant.character.unicode",
        ],
    ),
    (
        "terminal.ansiBrightWhite",
        &[
            "meta",
            "meta.preprocessor",
            "meta.selector",
            "meta.tag",
            "meta.type.annotation",
        ],
    ),
];

/// Language-feature rules appended after the table pass.
/// Some repeat tokens from [`ANSI_TOKENS`]; both entries are kept.
pub const EXTRA_TOKENS: &[(&str, &[&str])] = &[
    (
        "terminal.ansiRed",
        &["keyword.operator.logical", "keyword.operator.arithmetic"],
    ),
    (
        "terminal.ansiGreen",
        &["string.template", "string.quoted.template"],
    ),
    (
        "terminal.ansiBlue",
        &[
            "variable.other.readwrite.global",
            "variable.other.readwrite.local",
        ],
    ),
];

/// Create Monaco syntax highlighting rules from terminal colors
pub fn create_syntax_rules(customizations: &ColorCustomizations) -> Vec<SyntaxRule> {
    let mut rules = Vec::new();

    append_rules(&mut rules, ANSI_TOKENS, customizations);
    let table_count = rules.len();
    append_rules(&mut rules, EXTRA_TOKENS, customizations);

    tracing::debug!(
        "Generated {} syntax rules ({} from extensions)",
        rules.len(),
        rules.len() - table_count
    );

    rules
}

fn append_rules(
    rules: &mut Vec<SyntaxRule>,
    table: &[(&str, &[&str])],
    customizations: &ColorCustomizations,
) {
    for (ansi_key, tokens) in table {
        if let Some(color) = customizations.get(ansi_key) {
            rules.extend(tokens.iter().map(|token| SyntaxRule::new(color, token)));
        }
    }
}

/// Number of rules [`create_syntax_rules`] yields when exactly `present` keys are set
pub fn expected_rule_count(present: &[&str]) -> usize {
    ANSI_TOKENS
        .iter()
        .chain(EXTRA_TOKENS)
        .filter(|(key, _)| present.contains(key))
        .map(|(_, tokens)| tokens.len())
        .sum()
}
