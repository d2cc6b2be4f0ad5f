//! # cafeteria-core: Pure Business Logic for the Cafeteria POS
//!
//! Everything the counter needs to price and settle an order, with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cafeteria POS Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/terminal                                │   │
//! │  │    Main menu ──► Order entry ──► Payment ──► History / Admin   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ cafeteria-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Order   │  │   rules   │  │   │
//! │  │   │  Catalog  │  │ discounts │  │  Receipt  │  │   auth    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO STDIN • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                cafeteria-store (JSON files)                     │   │
//! │  │        productos.json, ventas/ventas_<date>.json                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Catalog, SalesRecord, DailySummary
//! - [`money`] - Money type with integer arithmetic
//! - [`order`] - Order, LineItem, Receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`auth`] - Admin gate
//!
//! ## Example Usage
//!
//! ```rust
//! use cafeteria_core::{Catalog, Money, Order};
//!
//! let catalog = Catalog::seed();
//! let mut order = Order::new();
//! order.add_item(catalog.find(1).unwrap(), 2).unwrap();
//! order.add_item(catalog.find(3).unwrap(), 1).unwrap();
//! order.apply_student_discount();
//!
//! assert_eq!(order.total(), Money::from_major(7650));
//! let receipt = order.finalize(Money::from_major(8000)).unwrap();
//! assert_eq!(receipt.change, Money::from_major(350));
//! ```

pub mod auth;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use auth::{Authenticator, StaticPasscode};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{LineItem, Order, Receipt, STUDENT_DISCOUNT_BPS};
pub use types::{Catalog, DailySummary, Product, ProductId, SaleItemRecord, SalesRecord};

// =============================================================================
// Constants
// =============================================================================

/// Maximum characters in a product name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum quantity of a single line item.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest product price, in whole currency units.
pub const MAX_PRICE_UNITS: i64 = 10_000_000;

/// Date format used for ledger file names and history prompts.
pub const LEDGER_DATE_FORMAT: &str = "%Y-%m-%d";
