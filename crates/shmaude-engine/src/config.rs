//! Configuration for shmaude.
//!
//! All fields are optional in `config.json`; missing ones take defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the config inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SHMAUDE_DATA_DIR";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before a simulated reply resolves, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// UI tick interval in milliseconds (animation and reply polling).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Icon glyph set.
    #[serde(default)]
    pub icons: IconStyle,
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_tick_rate_ms() -> u64 {
    100
}

/// Glyph set used for icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// Nerd Font glyphs.
    Nerd,
    /// Standard Unicode symbols.
    #[default]
    Unicode,
    /// ASCII only.
    Ascii,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            icons: IconStyle::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load `config.json` from `data_dir`, falling back to defaults when absent.
    pub fn load_or_default(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Reply delay as a [`Duration`].
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Tick interval as a [`Duration`], never zero.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Resolve the data directory: explicit path, then `SHMAUDE_DATA_DIR`, then
/// the platform config directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join("shmaude"))
        .ok_or(ConfigError::NoDataDir)
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No platform config directory and no override given.
    #[error("could not determine a data directory; pass --data-dir")]
    NoDataDir,
}
