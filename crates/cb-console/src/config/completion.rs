//! Completion configuration.

use serde::{Deserialize, Serialize};

/// Completion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Enable completion.
    pub enabled: bool,
    /// Maximum height (rows) for the completion menu.
    pub max_height: u16,
    /// Extra words offered alongside the command names.
    pub words: Vec<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            enabled: true,
            max_height: 10,
            words: Vec::new(),
        }
    }
}
