//! # Terminal Configuration
//!
//! Settings for the terminal app: where the data lives, the admin passcode,
//! and screen behavior.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAFETERIA_DATA_DIR=/srv/cafeteria                                  │
//! │     CAFETERIA_ADMIN_PASSCODE=4821                                      │
//! │     CAFETERIA_CLEAR_SCREEN=false                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CAFETERIA_CONFIG, or                                              │
//! │     ~/.config/cafeteria-pos/terminal.toml (Linux)                      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     data_dir = "data", passcode = "123", clear_screen = true           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # terminal.toml
//! [storage]
//! data_dir = "data"
//!
//! [admin]
//! passcode = "123"
//!
//! [display]
//! clear_screen = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use cafeteria_store::{StoreConfig, DEFAULT_DATA_DIR};

use crate::error::{AppError, AppResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CAFETERIA_CONFIG";

/// Where the POS data files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Admin gate settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Shared passcode for product management and sales history.
    #[serde(default = "default_passcode")]
    pub passcode: String,
}

fn default_passcode() -> String {
    "123".to_string()
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            passcode: default_passcode(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Clear the screen before drawing each menu.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Complete terminal configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub admin: AdminSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl TerminalConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (terminal.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading terminal config from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::config(format!("cannot read {}: {}", path.display(), e))
                })?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load terminal config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(AppError::config("storage.data_dir must not be empty"));
        }
        if self.admin.passcode.trim().is_empty() {
            return Err(AppError::config("admin.passcode must not be empty"));
        }
        Ok(())
    }

    /// Storage settings for `DataStore::open`.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.storage.data_dir)
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CAFETERIA_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Some(passcode) = lookup("CAFETERIA_ADMIN_PASSCODE") {
            debug!("Overriding admin passcode from environment");
            self.admin.passcode = passcode;
        }

        if let Some(flag) = lookup("CAFETERIA_CLEAR_SCREEN") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.display.clear_screen = true,
                "0" | "false" | "no" | "off" => self.display.clear_screen = false,
                _ => warn!(value = %flag, "Unknown CAFETERIA_CLEAR_SCREEN value in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cafeteria", "cafeteria-pos")
            .map(|dirs| dirs.config_dir().join("terminal.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TerminalConfig::default();
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.admin.passcode, "123");
        assert!(config.display.clear_screen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: TerminalConfig = toml::from_str("[admin]\npasscode = \"4821\"\n").unwrap();
        assert_eq!(config.admin.passcode, "4821");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert!(config.display.clear_screen);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terminal.toml");
        std::fs::write(
            &path,
            "[storage]\ndata_dir = \"/srv/cafeteria\"\n\n[display]\nclear_screen = false\n",
        )
        .unwrap();

        let config = TerminalConfig::load(Some(path)).unwrap();
        assert!(!config.display.clear_screen);
        assert_eq!(
            config.store_config().catalog_path(),
            PathBuf::from("/srv/cafeteria/productos.json")
        );
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("terminal.toml");
        std::fs::write(&path, "[admin\npasscode = ").unwrap();

        assert!(matches!(
            TerminalConfig::load(Some(path.clone())),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CAFETERIA_DATA_DIR", "/tmp/pos"),
            ("CAFETERIA_ADMIN_PASSCODE", "999"),
            ("CAFETERIA_CLEAR_SCREEN", "off"),
        ]
        .into_iter()
        .collect();

        let mut config = TerminalConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/pos"));
        assert_eq!(config.admin.passcode, "999");
        assert!(!config.display.clear_screen);
    }

    #[test]
    fn test_blank_passcode_is_rejected() {
        let mut config = TerminalConfig::default();
        config.admin.passcode = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&TerminalConfig::default()).unwrap();
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[admin]"));
        assert!(toml_str.contains("[display]"));
    }
}
