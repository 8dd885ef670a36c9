//! History configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// History configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Disable history entirely.
    pub disabled: bool,

    /// Custom history file (overrides default XDG location).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Number of lines kept, oldest dropped first.
    pub max_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            disabled: false,
            file: None,
            max_size: 12,
        }
    }
}
