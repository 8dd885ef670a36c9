//! Editor configuration.

use serde::{Deserialize, Serialize};

/// Characters that separate words for completion and hints.
pub const DEFAULT_WORD_BREAK_CHARS: &str = " \t\n\r\x0b\x0c`~!@#$%^&*()-=+[{]}\\|;:'\",<>/?";

/// Editor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Longest accepted line, in characters. Longer input is truncated.
    pub max_line_length: usize,
    /// Maximum number of candidates listed in a hint.
    pub max_hint_rows: usize,
    /// Characters that end a word when looking back from the cursor.
    pub word_break_chars: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            max_line_length: 128,
            max_hint_rows: 8,
            word_break_chars: DEFAULT_WORD_BREAK_CHARS.to_string(),
        }
    }
}
