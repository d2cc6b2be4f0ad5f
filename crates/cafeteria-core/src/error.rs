//! # Error Types
//!
//! Domain-specific error types for cafeteria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafeteria-core errors (this file)                                     │
//! │  ├── CoreError        - Order / settlement failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cafeteria-store errors (separate crate)                               │
//! │  └── StoreError       - File persistence failures                      │
//! │                                                                         │
//! │  terminal app errors                                                   │
//! │  └── AppError         - What the menu loop reports                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → AppError → Screen    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Tendered amount does not cover the order total.
    ///
    /// ## User Workflow
    /// ```text
    /// Total: $7,650
    ///      │
    ///      ▼
    /// Tendered: $7,000
    ///      │
    ///      ▼
    /// InsufficientPayment { total: $7,650, tendered: $7,000 }
    ///      │
    ///      ▼
    /// Sale is NOT recorded
    /// ```
    #[error("Insufficient payment: total {total}, tendered {tendered}")]
    InsufficientPayment { total: Money, tendered: Money },

    /// An order without line items cannot be settled.
    #[error("Order has no items")]
    EmptyOrder,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Quantity, price and name failures all land here; the `field` tells the
/// caller which input to ask for again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is out of the representable range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. unparseable number or date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientPayment {
            total: Money::from_major(7650),
            tendered: Money::from_major(7000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: total $7,650, tendered $7,000"
        );
        assert_eq!(CoreError::ProductNotFound(9).to_string(), "Product not found: 9");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(err.field(), "name");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
