//! Configuration management following XDG Base Directory specification.

mod completion;
mod editor;
mod highlight;
mod hints;
mod history;
mod prompt;
mod startup;

pub use completion::CompletionConfig;
pub use editor::{DEFAULT_WORD_BREAK_CHARS, EditorConfig};
pub use highlight::{HighlightConfig, HighlightRuleConfig};
pub use hints::HintsConfig;
pub use history::HistoryConfig;
pub use prompt::PromptConfig;
pub use startup::StartupConfig;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name for XDG directories.
const APP_NAME: &str = "cb-cli";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub startup: StartupConfig,
    pub prompt: PromptConfig,
    pub editor: EditorConfig,
    pub hints: HintsConfig,
    pub completion: CompletionConfig,
    pub history: HistoryConfig,
    pub highlight: HighlightConfig,
}

/// Get the XDG config directory for this application.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME))
}

/// Get the XDG data directory for this application.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_NAME))
}

/// Get the path to the config file.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("cb-cli.toml"))
}

/// Get the default history file path: `~/.local/share/cb-cli/history.txt`.
pub fn default_history_path() -> Option<PathBuf> {
    data_dir().map(|p| p.join("history.txt"))
}

/// Load configuration from the XDG location, or return defaults if not found.
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

/// Load configuration from a specific path.
///
/// A missing, unreadable or malformed file is logged and replaced by defaults.
pub fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        log::warn!("Config file not found: {:?}", path);
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("Failed to parse config file {:?}: {}", path, e);
            Config::default()
        }),
        Err(e) => {
            log::warn!("Failed to read config file: {}", e);
            Config::default()
        }
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Generate default configuration as a TOML string with comments.
pub fn generate_default_config() -> Result<String, toml::ser::Error> {
    let config = Config::default();
    let toml_content = toml::to_string_pretty(&config)?;

    let header = r#"# cb-cli configuration file
#
# Extra highlight rules can be appended with:
#
#   [[highlight.rules]]
#   pattern = "TODO"
#   color = "Red"

"#;

    Ok(format!("{}{}", header, toml_content))
}

/// Initialize a default configuration file at the XDG config location.
///
/// Returns the path where the config was written.
pub fn init_config(force: bool) -> anyhow::Result<PathBuf> {
    let config_path = config_file_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    write_default_config(&config_path, force)?;
    Ok(config_path)
}

/// Write the default configuration to `path`.
fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = generate_default_config()?;
    fs::write(path, content)?;
    Ok(())
}
