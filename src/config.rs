//! Configuration management for the bridge
//!
//! Runtime configuration is loaded from a JSON file so the kit layout and
//! log verbosity can be changed without recompiling the host binding.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "DRUMKIT_BRIDGE_CONFIG";

/// Config file read by [`BridgeConfig::load`] when no override is set
pub const DEFAULT_CONFIG_PATH: &str = "assets/bridge_config.json";

/// Complete bridge configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Layout of the engine data location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory under the data location holding kit files
    pub kits_directory: String,
    /// File extension identifying a kit file (without the dot)
    pub kit_extension: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kits_directory: "Kits".to_string(),
            kit_extension: "xml".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level, falling back to INFO on unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl BridgeConfig {
    /// Load configuration from JSON file
    ///
    /// Missing files and invalid JSON are logged and replaced by defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from `DRUMKIT_BRIDGE_CONFIG` or the default asset path.
    pub fn load() -> Self {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from_file(path),
            _ => Self::load_from_file(DEFAULT_CONFIG_PATH),
        }
    }
}
