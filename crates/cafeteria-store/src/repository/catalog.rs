//! # Catalog Store
//!
//! Loads and saves the product list in `productos.json`.
//!
//! ## Load Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CatalogStore::load()                             │
//! │                                                                         │
//! │  productos.json                                                        │
//! │       │                                                                 │
//! │       ├── missing ─────────► seed catalog, saved, returned             │
//! │       ├── empty / bad JSON ► warn!, seed catalog, saved, returned       │
//! │       ├── unreadable ──────► StoreError::Io (caller falls back)         │
//! │       └── valid ───────────► returned as-is (no write)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Shape
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "nombre": "Café Americano",
//!     "precio": 3000
//!   }
//! ]
//! ```

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use cafeteria_core::Catalog;

use super::{read_json, write_json};
use crate::error::{StoreError, StoreResult};

/// Repository for the product catalog file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the catalog, writing the seed products first if there is no
    /// usable file.
    pub fn load(&self) -> StoreResult<Catalog> {
        match read_json::<Catalog>(&self.path) {
            Ok(Some(catalog)) => {
                debug!(count = catalog.len(), "Catalog loaded");
                Ok(catalog)
            }
            Ok(None) => {
                info!(path = %self.path.display(), "No catalog file, writing default products");
                self.reseed()
            }
            Err(StoreError::Corrupt { reason, .. }) => {
                warn!(
                    path = %self.path.display(),
                    reason = %reason,
                    "Catalog file is corrupt, replacing with default products"
                );
                self.reseed()
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrites the catalog file with the given products.
    pub fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        write_json(&self.path, catalog)?;
        debug!(count = catalog.len(), "Catalog saved");
        Ok(())
    }

    /// Whether a catalog file is present (valid or not).
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn reseed(&self) -> StoreResult<Catalog> {
        let catalog = Catalog::seed();
        self.save(&catalog)?;
        Ok(catalog)
    }
}
