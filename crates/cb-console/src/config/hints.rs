//! Hint configuration.

use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};

/// Hint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HintsConfig {
    /// Enable inline hints.
    pub enabled: bool,
    /// Minimum prefix length (in characters) before hints are shown.
    pub min_chars: usize,
    /// A prefix starting with this text is hinted regardless of its length.
    /// Empty disables the shortcut.
    pub sentinel: String,
    /// Color of a hint when exactly one candidate matches.
    pub unique_color: Color,
    /// Color of hints otherwise.
    pub color: Color,
}

impl Default for HintsConfig {
    fn default() -> Self {
        HintsConfig {
            enabled: true,
            min_chars: 2,
            sentinel: ".".to_string(),
            unique_color: Color::Green,
            color: Color::DarkGray,
        }
    }
}
