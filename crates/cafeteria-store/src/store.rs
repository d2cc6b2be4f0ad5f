//! # Data Store
//!
//! The data directory handle and its configuration.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Data Directory                                  │
//! │                                                                         │
//! │  Terminal startup                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(data_dir) ← Where the files live                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataStore::open(config) ← Creates data_dir and ventas/ if missing     │
//! │       │                                                                 │
//! │       ├── catalog() ──► CatalogStore  (data_dir/productos.json)        │
//! │       └── ledger()  ──► SalesLedger   (data_dir/ventas/)               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::repository::catalog::CatalogStore;
use crate::repository::ledger::SalesLedger;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust
/// use cafeteria_store::StoreConfig;
///
/// let config = StoreConfig::new("/srv/cafeteria").catalog_file("menu.json");
/// assert!(config.catalog_path().ends_with("menu.json"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Root of all POS data.
    pub data_dir: PathBuf,

    /// Catalog file name inside `data_dir`.
    /// Default: productos.json
    pub catalog_file: String,

    /// Ledger directory name inside `data_dir`.
    /// Default: ventas
    pub ledger_dir: String,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            catalog_file: "productos.json".to_string(),
            ledger_dir: "ventas".to_string(),
        }
    }

    /// Sets the catalog file name.
    pub fn catalog_file(mut self, name: impl Into<String>) -> Self {
        self.catalog_file = name.into();
        self
    }

    /// Sets the ledger directory name.
    pub fn ledger_dir(mut self, name: impl Into<String>) -> Self {
        self.ledger_dir = name.into();
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(&self.ledger_dir)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

// =============================================================================
// DataStore
// =============================================================================

/// Handle to an opened data directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    config: StoreConfig,
}

impl DataStore {
    /// Opens the data directory, creating it and the ledger directory if
    /// they do not exist yet.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(path = %config.data_dir.display(), "Opening data directory");

        let ledger_path = config.ledger_path();
        fs::create_dir_all(&ledger_path).map_err(|e| StoreError::io(&ledger_path, e))?;

        Ok(DataStore { config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the catalog repository.
    pub fn catalog(&self) -> CatalogStore {
        CatalogStore::new(self.config.catalog_path())
    }

    /// Returns the sales ledger repository.
    pub fn ledger(&self) -> SalesLedger {
        SalesLedger::new(self.config.ledger_path())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data");

        let store = DataStore::open(StoreConfig::new(&root)).unwrap();

        assert!(root.join("ventas").is_dir());
        assert_eq!(store.catalog().path(), root.join("productos.json"));
        assert_eq!(store.ledger().dir(), root.join("ventas"));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::default()
            .catalog_file("menu.json")
            .ledger_dir("sales");

        assert_eq!(config.catalog_path(), PathBuf::from("data/menu.json"));
        assert_eq!(config.ledger_path(), PathBuf::from("data/sales"));
    }

    #[test]
    fn test_open_fails_when_data_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("data");
        std::fs::write(&file, "").unwrap();

        assert!(matches!(
            DataStore::open(StoreConfig::new(&file)),
            Err(StoreError::Io { .. })
        ));
    }
}
