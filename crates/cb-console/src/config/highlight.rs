//! Highlight configuration.

use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};

/// Extra highlight rules, applied after the built-in ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub rules: Vec<HighlightRuleConfig>,
}

/// A single user-defined rule.
///
/// ```toml
/// [[highlight.rules]]
/// pattern = "TODO"
/// color = "Red"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightRuleConfig {
    /// Regular expression matched against the whole input line.
    pub pattern: String,
    /// Color of every character covered by a match.
    pub color: Color,
}
