//! Startup configuration.

use serde::{Deserialize, Serialize};

/// Startup configuration.
///
/// Settings in this section are evaluated once at startup and do not change during the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Show startup banner.
    pub show_banner: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        StartupConfig { show_banner: true }
    }
}
