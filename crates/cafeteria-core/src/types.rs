//! # Domain Types
//!
//! Core domain types used throughout the cafeteria POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SalesRecord   │   │ SaleItemRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  fecha_hora     │   │  producto       │       │
//! │  │  nombre         │   │  items          │   │  cantidad       │       │
//! │  │  precio         │   │  subtotal       │   │  precio_unitario│       │
//! │  └─────────────────┘   │  descuento      │   │  subtotal       │       │
//! │                        │  total          │   └─────────────────┘       │
//! │  ┌─────────────────┐   └─────────────────┘                             │
//! │  │    Catalog      │                                                   │
//! │  │  Vec<Product>   │   ┌─────────────────┐                             │
//! │  │  next_id()      │   │  DailySummary   │  (derived, never stored)    │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Compatibility
//! Field names on disk are the Spanish ones the cafeteria's existing data
//! files use; the Rust names are English. The `#[serde(rename)]` attributes
//! are the single place where the two meet.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Catalog-wide product identifier.
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the catalog, never changes after creation.
    pub id: ProductId,

    /// Display name shown on the menu and on sales records.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Unit price.
    #[serde(rename = "precio")]
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Menu line: `3. Empanada - $2,500`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {}", self.id, self.name, self.price)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full set of sellable products, in file order.
///
/// Held by the session for its whole lifetime and handed by reference to
/// whatever needs it. Persisting is the store crate's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The five products a fresh install starts with.
    pub fn seed() -> Self {
        Catalog::new(vec![
            Product::new(1, "Café Americano", Money::from_major(3000)),
            Product::new(2, "Sandwich de Jamón", Money::from_major(8000)),
            Product::new(3, "Empanada", Money::from_major(2500)),
            Product::new(4, "Jugo Natural", Money::from_major(4000)),
            Product::new(5, "Croissant", Money::from_major(3500)),
        ])
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Id for the next product: highest existing id + 1, or 1 when empty.
    ///
    /// Deleting the highest-id product frees its id for reuse. `None` once
    /// the highest id is `ProductId::MAX`.
    pub fn next_id(&self) -> Option<ProductId> {
        self.products.iter().map(|p| p.id).max().unwrap_or(0).checked_add(1)
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the product with this id, returning it.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Sales Record
// =============================================================================

/// One line of a persisted sale. Product data is frozen at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItemRecord {
    #[serde(rename = "producto")]
    pub product_name: String,

    #[serde(rename = "cantidad")]
    pub quantity: u32,

    #[serde(rename = "precio_unitario")]
    pub unit_price: Money,

    pub subtotal: Money,
}

/// The durable snapshot of a settled order, as stored in the daily ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Local time the order was opened (ISO 8601, no offset).
    #[serde(rename = "fecha_hora", with = "iso_timestamp")]
    pub timestamp: NaiveDateTime,

    pub items: Vec<SaleItemRecord>,

    pub subtotal: Money,

    #[serde(rename = "descuento")]
    pub discount: Money,

    #[serde(rename = "tiene_descuento_estudiante")]
    pub has_student_discount: bool,

    pub total: Money,
}

impl SalesRecord {
    /// Calendar day the record is filed under.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

// =============================================================================
// Daily Summary
// =============================================================================

/// Totals for one ledger day, derived from the stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub count: usize,
    pub total: Money,
}

impl DailySummary {
    pub fn from_records(date: NaiveDate, records: &[SalesRecord]) -> Self {
        DailySummary {
            date,
            count: records.len(),
            total: records.iter().map(|r| r.total).sum(),
        }
    }
}

/// `fecha_hora` format: microsecond precision, no offset.
///
/// Reading accepts any fractional precision (or none), so files written by
/// older tools still load.
mod iso_timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<NaiveDateTime>().map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
