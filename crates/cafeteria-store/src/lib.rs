//! # cafeteria-store: JSON File Storage for the Cafeteria POS
//!
//! This crate owns the data directory: the product catalog file and the
//! per-day sales ledger.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cafeteria POS Data Flow                            │
//! │                                                                         │
//! │  Terminal session (new order, manage products, history)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 cafeteria-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   DataStore   │    │  Repositories │    │   Manager    │  │   │
//! │  │   │  (store.rs)   │    │               │    │ (manager.rs) │  │   │
//! │  │   │               │    │ CatalogStore  │◄───│ create       │  │   │
//! │  │   │ StoreConfig   │───►│ SalesLedger   │    │ update       │  │   │
//! │  │   │ data_dir      │    │               │    │ delete       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   data/productos.json        data/ventas/ventas_<date>.json     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Data directory handle and configuration
//! - [`error`] - Storage error types
//! - [`repository`] - Catalog and ledger file access
//! - [`manager`] - Write-through product administration
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cafeteria_store::{DataStore, StoreConfig};
//!
//! let store = DataStore::open(StoreConfig::new("data"))?;
//! let catalog = store.catalog().load()?;
//! let today = chrono::Local::now().date_naive();
//! println!("{} products, {} sales today", catalog.len(), store.ledger().daily_count(today));
//! # Ok::<(), cafeteria_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use manager::{CatalogManager, Confirmation, DeleteOutcome, ProductUpdate, UpdateOutcome};
pub use store::{DataStore, StoreConfig, DEFAULT_DATA_DIR};

// Repository re-exports for convenience
pub use repository::catalog::CatalogStore;
pub use repository::ledger::SalesLedger;
