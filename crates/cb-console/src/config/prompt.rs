//! Prompt configuration.

use nu_ansi_term::Color;
use serde::{Deserialize, Serialize};

/// Prompt configuration.
///
/// The rendered prompt is `text` in bold `color`, followed by the plain `symbol`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Prompt label.
    pub text: String,
    /// Unstyled text drawn after the label.
    pub symbol: String,
    /// Color of the label.
    pub color: Color,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            text: "cb-cli".to_string(),
            symbol: "> ".to_string(),
            color: Color::LightGreen,
        }
    }
}
