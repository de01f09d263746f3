//! Launcher configuration.
//!
//! Stored in JSON format at `~/.portlaunch/config.json`. Every field is
//! optional in the file; missing fields take their defaults.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Configuration for port selection and the web UI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LauncherConfig {
    /// First port tried when no explicit port is given.
    #[serde(default = "default_port")]
    pub default_port: u16,

    /// Number of consecutive ports tried before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Host rendered into the reported URL.
    #[serde(default = "default_host")]
    pub host: String,

    /// Program and leading arguments. The port is appended last.
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Pause after spawning before reporting the URL, in milliseconds.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,

    /// Connect timeout of a single port probe, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_port() -> u16 {
    8080
}

fn default_max_attempts() -> u32 {
    10
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_command() -> Vec<String> {
    ["streamlit", "run", "webui.py", "--server.port"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_startup_delay_ms() -> u64 {
    2000
}

fn default_probe_timeout_ms() -> u64 {
    500
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            default_port: default_port(),
            max_attempts: default_max_attempts(),
            host: default_host(),
            command: default_command(),
            startup_delay_ms: default_startup_delay_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl LauncherConfig {
    /// Check the values a launch depends on.
    pub fn validate(&self) -> Result<()> {
        if self.default_port == 0 {
            return Err(Error::Config("defaultPort must be between 1 and 65535".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(Error::Config("maxAttempts must be at least 1".to_string()));
        }
        if self.probe_timeout_ms == 0 {
            return Err(Error::Config("probeTimeoutMs must be greater than 0".to_string()));
        }
        if self.command.is_empty() || self.command[0].trim().is_empty() {
            return Err(Error::Config("command must name a program".to_string()));
        }
        Ok(())
    }

    /// Post-spawn delay as a `Duration`.
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

/// Configuration store for reading and writing the launcher config.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.portlaunch/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".portlaunch").join("config.json");

        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the configuration file.
    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<LauncherConfig> {
        if !self.config_path.exists() {
            return Ok(LauncherConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        let config: LauncherConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &LauncherConfig) -> Result<()> {
        config.validate()?;

        if let Some(config_dir) = self.config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir).await.map_err(|e| {
                    Error::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write to a temp file then rename so readers never see a partial file
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio_test::{assert_err, assert_ok};

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config, LauncherConfig::default());
        assert_eq!(config.default_port, 8080);
        assert_eq!(config.command.last().unwrap(), "--server.port");
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let config = LauncherConfig {
            default_port: 3000,
            max_attempts: 3,
            command: vec!["webui".to_string(), "--port".to_string()],
            ..LauncherConfig::default()
        };

        assert_ok!(store.save(&config).await);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let (store, _dir) = test_store();
        std::fs::write(store.path(), r#"{"defaultPort": 9000, "startupDelayMs": 0}"#).unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.default_port, 9000);
        assert_eq!(config.startup_delay(), Duration::ZERO);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.host, "localhost");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (store, _dir) = test_store();
        std::fs::write(store.path(), "{not json").unwrap();

        let err = assert_err!(store.load().await);
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn test_rejects_zero_attempts() {
        let (store, _dir) = test_store();
        std::fs::write(store.path(), r#"{"maxAttempts": 0}"#).unwrap();

        assert_err!(store.load().await);
    }

    #[test]
    fn test_validate_empty_command() {
        let config = LauncherConfig {
            command: Vec::new(),
            ..LauncherConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(LauncherConfig::default().validate().is_ok());
    }
}
