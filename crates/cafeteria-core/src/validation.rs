//! # Validation Module
//!
//! Input validation rules for the cafeteria POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompts                                             │
//! │  ├── Parse integers / decimals, re-prompt on garbage                   │
//! │  └── Never raise to the menu loop                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE: Business rule validation                        │
//! │  ├── Positive quantity, positive price, non-blank name                 │
//! │  └── Returns ValidationError naming the field                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order / Catalog Manager                                      │
//! │  └── Calls these before mutating anything                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafeteria_core::validation::{validate_product_name, validate_quantity};
//!
//! assert_eq!(validate_product_name("  Empanada ").unwrap(), "Empanada");
//! assert_eq!(validate_quantity(2).unwrap(), 2);
//! assert!(validate_quantity(0).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{LEDGER_DATE_FORMAT, MAX_ITEM_QUANTITY, MAX_NAME_LENGTH, MAX_PRICE_UNITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
/// - At most `MAX_NAME_LENGTH` characters
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a student card number. Any non-blank value is accepted.
pub fn validate_student_card(card: &str) -> ValidationResult<()> {
    if card.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "student card".to_string(),
        });
    }
    Ok(())
}

/// Parses a ledger date in `YYYY-MM-DD` form.
pub fn validate_date(input: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), LEDGER_DATE_FORMAT).map_err(|e| {
        ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - At most `MAX_ITEM_QUANTITY`
///
/// ## User Workflow
/// ```text
/// Cantidad de Empanada: 0
///      │
///      ▼
/// validate_quantity(0) ← THIS FUNCTION
///      │
///      ├── Error: "quantity must be positive" → item is not added
///      │
///      └── 5000? → Error: "quantity must be between 1 and 999"
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<u32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(qty as u32)
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be positive; free items are not allowed
/// - At most `MAX_PRICE_UNITS` whole units
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price > Money::from_major(MAX_PRICE_UNITS) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_UNITS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
