//! # Order
//!
//! The order being rung up at the counter, from first item to settlement.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Order Lifecycle                                 │
//! │                                                                         │
//! │   Order::new()          add_item() × n        apply_student_discount()  │
//! │   ────────────          ──────────────        ────────────────────────  │
//! │   empty, timestamped ─► items.push(line) ───► discount = 10% subtotal  │
//! │                                               (at most once)            │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                       finalize(tendered)                                │
//! │                       ├── EmptyOrder            → order dropped         │
//! │                       ├── InsufficientPayment   → order dropped         │
//! │                       └── Receipt { record, tendered, change }          │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                       SalesLedger::record(&receipt.record)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Freezing
//! Each [`LineItem`] copies the product's name and price when it is added.
//! Editing the catalog afterwards does not change an order in progress.

use chrono::{Local, NaiveDateTime};
use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductId, SaleItemRecord, SalesRecord};
use crate::validation::validate_quantity;

/// Student discount in basis points (10%).
pub const STUDENT_DISCOUNT_BPS: u32 = 1000;

// =============================================================================
// Line Item
// =============================================================================

/// One product/quantity pair in an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: ProductId,

    /// Name at time of adding (frozen)
    pub name: String,

    /// Price at time of adding (frozen)
    pub unit_price: Money,

    pub quantity: u32,

    /// `unit_price × quantity`
    pub subtotal: Money,
}

impl LineItem {
    /// `None` when the line subtotal does not fit in `Money`.
    fn from_product(product: &Product, quantity: u32) -> Option<Self> {
        Some(LineItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            subtotal: product.price.checked_multiply_quantity(quantity)?,
        })
    }

    fn to_record(&self) -> SaleItemRecord {
        SaleItemRecord {
            product_name: self.name.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            subtotal: self.subtotal,
        }
    }
}

/// Receipt line: `2x Café Americano - $6,000`.
impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {} - {}", self.quantity, self.name, self.subtotal)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An open order.
///
/// ## Invariants
/// - `discount` is zero unless `has_student_discount`
/// - `has_student_discount` goes false → true at most once
/// - `total() == subtotal() - discount`, never negative
/// - Items keep insertion order; the same product added twice is two lines
#[derive(Debug, Clone)]
pub struct Order {
    items: Vec<LineItem>,
    discount: Money,
    has_student_discount: bool,
    created_at: NaiveDateTime,
}

impl Order {
    /// Opens an empty order stamped with the local wall clock.
    pub fn new() -> Self {
        Self::with_timestamp(Local::now().naive_local())
    }

    /// Opens an empty order with an explicit creation time.
    pub fn with_timestamp(created_at: NaiveDateTime) -> Self {
        Order {
            items: Vec::new(),
            discount: Money::zero(),
            has_student_discount: false,
            created_at,
        }
    }

    /// Appends a line for `quantity` units of `product`.
    ///
    /// Quantity arrives as the raw integer the cashier typed; zero and
    /// negative values are rejected without touching the order, and so is a
    /// line that would push the subtotal past what `Money` can hold.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<&LineItem> {
        let quantity = validate_quantity(quantity)?;
        let line = LineItem::from_product(product, quantity)
            .filter(|line| self.subtotal().checked_add(line.subtotal).is_some())
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "subtotal".to_string(),
                min: 0,
                max: i64::MAX,
            })?;
        self.items.push(line);

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Sum of line subtotals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.subtotal).sum()
    }

    /// Applies the 10% student discount to the current subtotal.
    ///
    /// The amount is fixed here; items added later are charged in full.
    /// Returns `false` when the discount was already applied.
    pub fn apply_student_discount(&mut self) -> bool {
        if self.has_student_discount {
            return false;
        }
        self.discount = self.subtotal().percentage(STUDENT_DISCOUNT_BPS);
        self.has_student_discount = true;
        true
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    pub fn has_student_discount(&self) -> bool {
        self.has_student_discount
    }

    pub fn total(&self) -> Money {
        self.subtotal() - self.discount
    }

    /// Checks a tendered amount against the total and returns the change.
    pub fn settle(&self, tendered: Money) -> CoreResult<Money> {
        let total = self.total();
        if tendered < total {
            return Err(CoreError::InsufficientPayment { total, tendered });
        }
        Ok(tendered - total)
    }

    /// The persisted form of this order, stamped with its creation time.
    pub fn to_snapshot(&self) -> SalesRecord {
        SalesRecord {
            timestamp: self.created_at,
            items: self.items.iter().map(LineItem::to_record).collect(),
            subtotal: self.subtotal(),
            discount: self.discount,
            has_student_discount: self.has_student_discount,
            total: self.total(),
        }
    }

    /// Closes the order against a payment.
    ///
    /// Consumes the order either way; on error nothing should be recorded.
    pub fn finalize(self, tendered: Money) -> CoreResult<Receipt> {
        if self.is_empty() {
            return Err(CoreError::EmptyOrder);
        }
        let change = self.settle(tendered)?;

        Ok(Receipt {
            record: self.to_snapshot(),
            tendered,
            change,
        })
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a settled order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub record: SalesRecord,
    pub tendered: Money,
    pub change: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Catalog;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(14, 3, 22)
            .unwrap()
    }

    #[test]
    fn test_oversized_lines_are_rejected() {
        let banquet = Product::new(6, "Banquete", "1000000000000".parse().unwrap());
        let mut order = Order::with_timestamp(fixed_time());

        assert!(matches!(
            order.add_item(&banquet, 1_000_000),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(order.is_empty());

        // Price from a hand-edited file, never validated
        let gold = Product::new(7, "Oro", Money::from_cents(i64::MAX / 3));
        order.add_item(&gold, 2).unwrap();
        assert!(matches!(
            order.add_item(&gold, 2),
            Err(CoreError::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "subtotal"
        ));
        assert_eq!(order.items().len(), 1);
        assert!(order.total().is_positive());
    }

    fn seeded_order() -> Order {
        let catalog = Catalog::seed();
        let mut order = Order::with_timestamp(fixed_time());
        order.add_item(catalog.find(1).unwrap(), 2).unwrap();
        order.add_item(catalog.find(3).unwrap(), 1).unwrap();
        order
    }

    #[test]
    fn test_empty_order() {
        let order = Order::with_timestamp(fixed_time());
        assert!(order.is_empty());
        assert_eq!(order.subtotal(), Money::zero());
        assert_eq!(order.total(), Money::zero());
    }

    #[test]
    fn test_add_item_freezes_price() {
        let mut product = Product::new(9, "Té", Money::from_major(1500));
        let mut order = Order::new();

        let line = order.add_item(&product, 3).unwrap();
        assert_eq!(line.subtotal, Money::from_major(4500));
        assert_eq!(line.to_string(), "3x Té - $4,500");

        product.price = Money::from_major(9999);
        assert_eq!(order.subtotal(), Money::from_major(4500));
    }

    #[test]
    fn test_add_item_rejects_non_positive_quantity() {
        let product = Product::new(1, "Café", Money::from_major(3000));
        let mut order = Order::new();

        for qty in [0, -1] {
            let err = order.add_item(&product, qty).unwrap_err();
            match err {
                CoreError::Validation(ValidationError::MustBePositive { field }) => {
                    assert_eq!(field, "quantity")
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
        assert!(order.is_empty());
    }

    #[test]
    fn test_same_product_twice_is_two_lines() {
        let product = Product::new(1, "Café", Money::from_major(3000));
        let mut order = Order::new();
        order.add_item(&product, 2).unwrap();
        order.add_item(&product, 5).unwrap();

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.subtotal(), product.price.multiply_quantity(7));
    }

    #[test]
    fn test_student_discount_scenario() {
        let mut order = seeded_order();
        assert_eq!(order.subtotal(), Money::from_major(8500));

        assert!(order.apply_student_discount());
        assert_eq!(order.discount(), Money::from_major(850));
        assert_eq!(order.total(), Money::from_major(7650));

        let change = order.settle(Money::from_major(8000)).unwrap();
        assert_eq!(change, Money::from_major(350));
    }

    #[test]
    fn test_discount_is_idempotent_and_fixed() {
        let mut order = seeded_order();
        assert!(order.apply_student_discount());
        assert!(!order.apply_student_discount());
        assert_eq!(order.discount(), Money::from_major(850));

        let croissant = Product::new(5, "Croissant", Money::from_major(3500));
        order.add_item(&croissant, 1).unwrap();

        assert_eq!(order.discount(), Money::from_major(850));
        assert_eq!(order.total(), Money::from_major(12000 - 850));
    }

    #[test]
    fn test_settle_boundaries() {
        let order = seeded_order();

        assert_eq!(order.settle(Money::from_major(8500)).unwrap(), Money::zero());
        assert!(matches!(
            order.settle(Money::from_cents(849_999)),
            Err(CoreError::InsufficientPayment { .. })
        ));
    }

    #[test]
    fn test_finalize_produces_record() {
        let mut order = seeded_order();
        order.apply_student_discount();

        let receipt = order.finalize(Money::from_major(10000)).unwrap();
        assert_eq!(receipt.change, Money::from_major(2350));
        assert_eq!(receipt.tendered, Money::from_major(10000));

        let record = &receipt.record;
        assert_eq!(record.timestamp, fixed_time());
        assert_eq!(record.items.len(), 2);
        assert_eq!(record.items[0].product_name, "Café Americano");
        assert_eq!(record.items[0].quantity, 2);
        assert_eq!(record.items[0].subtotal, Money::from_major(6000));
        assert!(record.has_student_discount);
        assert_eq!(record.total, Money::from_major(7650));
    }

    #[test]
    fn test_finalize_rejects_empty_order() {
        let order = Order::with_timestamp(fixed_time());
        assert!(matches!(
            order.finalize(Money::from_major(100)),
            Err(CoreError::EmptyOrder)
        ));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let record = seeded_order().to_snapshot();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["fecha_hora"], "2024-05-01T14:03:22.000000");
        assert_eq!(json["subtotal"], 8500);
        assert_eq!(json["descuento"], 0);
        assert_eq!(json["tiene_descuento_estudiante"], false);
        assert_eq!(json["items"][1]["producto"], "Empanada");
        assert_eq!(json["items"][1]["precio_unitario"], 2500);
    }
}
