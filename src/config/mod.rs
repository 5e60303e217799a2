//! Configuration management module.
//!
//! Handles loading and saving application preferences from a JSON file next
//! to the executable. Recipes and selections are never stored here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::health::RangeClamp;

const CONFIG_FILE_NAME: &str = "recipe_finder_config.json";

/// Level names accepted for `log_level`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeChoice,
    #[serde(default)]
    pub range_clamp: RangeClamp,
    #[serde(default = "default_width")]
    pub window_width: f32,
    #[serde(default = "default_height")]
    pub window_height: f32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_width() -> f32 {
    800.0
}

fn default_height() -> f32 {
    600.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            range_clamp: RangeClamp::default(),
            window_width: default_width(),
            window_height: default_height(),
            log_level: default_log_level(),
        }
    }
}

/// Configuration manager for loading/saving config.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(Self::get_exe_directory().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the directory containing the executable.
    fn get_exe_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration. A missing file yields the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: self.config_path.clone(),
                source,
            })?;

        // Repair values a hand-edited file may have broken
        if !(config.window_width.is_finite() && config.window_width > 0.0) {
            config.window_width = default_width();
        }
        if !(config.window_height.is_finite() && config.window_height > 0.0) {
            config.window_height = default_height();
        }
        let level = config.log_level.trim().to_ascii_lowercase();
        config.log_level = if LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            default_log_level()
        };

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Json {
            path: self.config_path.clone(),
            source,
        })?;
        fs::write(&self.config_path, json).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
