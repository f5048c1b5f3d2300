//! Configuration for the purge orchestrator

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for the purge pipeline
///
/// The watched directory is fixed for the process lifetime; only the
/// enable/disable gate changes at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeConfig {
    /// Directory holding the pending worklist files
    pub worklist_dir: PathBuf,

    /// Worklist file extension, compared case-insensitively, without the dot
    /// Default: "wl"
    #[serde(default = "default_extension")]
    pub worklist_extension: String,

    /// Directory holding the daily dedup cache files
    /// Default: the process working directory
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// File name prefix for daily cache files
    /// Default: "WorklistPurgeCache"
    #[serde(default)]
    pub cache_prefix: Option<String>,
}

fn default_extension() -> String {
    "wl".to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".")
}

impl PurgeConfig {
    /// Create a config watching the given directory, defaults elsewhere
    pub fn new(worklist_dir: impl Into<PathBuf>) -> Self {
        Self {
            worklist_dir: worklist_dir.into(),
            worklist_extension: default_extension(),
            cache_dir: default_cache_dir(),
            cache_prefix: None,
        }
    }

    /// Override the cache directory
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PurgeConfig::new("/var/worklists");
        assert_eq!(config.worklist_dir, PathBuf::from("/var/worklists"));
        assert_eq!(config.worklist_extension, "wl");
        assert_eq!(config.cache_dir, PathBuf::from("."));
        assert!(config.cache_prefix.is_none());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let toml = r#"worklist_dir = "/var/worklists""#;
        let config: PurgeConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.worklist_extension, "wl");
        assert_eq!(config.cache_dir, PathBuf::from("."));
    }

    #[test]
    fn test_with_cache_dir() {
        let config = PurgeConfig::new("/var/worklists").with_cache_dir("/var/cache");
        assert_eq!(config.cache_dir, PathBuf::from("/var/cache"));
    }
}
