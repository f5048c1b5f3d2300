//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files: bind address and port plus the purger
//! section (gate default, watched directory, cache location).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wlpurge_engine::PurgeConfig;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8042)
    pub bind_port: u16,

    /// Purger settings
    #[serde(default)]
    pub purger: PurgerSettings,
}

/// Purger section of the configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PurgerSettings {
    /// Whether the purger starts enabled
    #[serde(default)]
    pub enabled: bool,

    /// Directory holding pending worklist files; required when `enabled`
    pub worklist_dir: Option<PathBuf>,

    /// Worklist file extension without the dot (default "wl")
    #[serde(default = "default_extension")]
    pub worklist_extension: String,

    /// Directory for daily dedup cache files (default ".")
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Daily cache file name prefix (default "WorklistPurgeCache")
    #[serde(default)]
    pub cache_prefix: Option<String>,
}

fn default_extension() -> String {
    "wl".to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PurgerSettings {
    fn default() -> Self {
        PurgerSettings {
            enabled: false,
            worklist_dir: None,
            worklist_extension: default_extension(),
            cache_dir: default_cache_dir(),
            cache_prefix: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration.
    ///
    /// An enabled purger with no watched directory is a fatal startup
    /// condition: the server refuses to start rather than scan nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.purger.enabled && self.purger.worklist_dir.is_none() {
            return Err(ConfigError::MissingField("purger.worklist_dir".to_string()));
        }
        Ok(())
    }

    /// Build the engine's runtime settings from this configuration
    ///
    /// A disabled purger may omit the watched directory; it then defaults
    /// to an empty path and every scan (after an explicit enable) resolves
    /// as directory-unavailable.
    pub fn purge_config(&self) -> PurgeConfig {
        PurgeConfig {
            worklist_dir: self.purger.worklist_dir.clone().unwrap_or_default(),
            worklist_extension: self.purger.worklist_extension.clone(),
            cache_dir: self.purger.cache_dir.clone(),
            cache_prefix: self.purger.cache_prefix.clone(),
        }
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8042,
            purger: PurgerSettings {
                enabled: false,
                worklist_dir: None,
                worklist_extension: default_extension(),
                cache_dir: default_cache_dir(),
                cache_prefix: None,
            },
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
