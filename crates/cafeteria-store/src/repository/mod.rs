//! # Repository Module
//!
//! File-backed repositories for the cafeteria POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Session / CatalogManager                                              │
//! │       │                                                                 │
//! │       │  store.catalog().load()                                        │
//! │       │  store.ledger().record(&receipt.record)                        │
//! │       ▼                                                                 │
//! │  CatalogStore                     SalesLedger                          │
//! │  ├── load()                       ├── append(day, record)              │
//! │  └── save(&catalog)               ├── record(record)                   │
//! │                                   ├── query(day)                       │
//! │                                   └── daily_summary(day)               │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  data/productos.json              data/ventas/ventas_<date>.json       │
//! │                                                                         │
//! │  Every call reads or rewrites a whole file. Nothing is cached.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CatalogStore`](catalog::CatalogStore) - Product list
//! - [`SalesLedger`](ledger::SalesLedger) - Daily sales records

pub mod catalog;
pub mod ledger;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Reads a whole JSON file.
///
/// Returns `Ok(None)` when the file does not exist. An empty, non-UTF-8
/// or unparseable file is `StoreError::Corrupt`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    let raw = String::from_utf8(bytes).map_err(|e| StoreError::corrupt(path, e))?;

    if raw.trim().is_empty() {
        return Err(StoreError::corrupt(path, "file is empty"));
    }

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StoreError::corrupt(path, e))
}

/// Rewrites a whole JSON file with 2-space indentation, creating the
/// parent directory on demand.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::corrupt(path, e))?;
    fs::write(path, json).map_err(|e| StoreError::io(path, e))?;

    debug!(path = %path.display(), "Wrote file");
    Ok(())
}
