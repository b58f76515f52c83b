use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration from an optional `bdash.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Auto-refresh interval in seconds; 0 disables the timer.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Max issues per status bucket; 0 means unlimited.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            refresh_secs: default_refresh_secs(),
            limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, e.g. `text = "#B0AAFF"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_refresh_secs() -> u64 {
    6
}

fn default_limit() -> usize {
    200
}

impl Config {
    /// Load `bdash.toml` by walking up from `start`. A missing file is
    /// not an error; the defaults apply.
    pub fn discover(start: &Path) -> Result<Config, ConfigError> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join("bdash.toml");
            if candidate.is_file() {
                return Config::load(&candidate);
            }
            if !current.pop() {
                return Ok(Config::default());
            }
        }
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
