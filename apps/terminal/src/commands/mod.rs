//! # Menu Commands
//!
//! One file per main-menu entry. Each adds methods to [`Session`](crate::session::Session).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here
//! ├── order.rs    ◄─── 1. Nuevo Pedido
//! ├── catalog.rs  ◄─── 2. Gestionar Productos (admin)
//! └── history.rs  ◄─── 3. Ver Historial de Ventas (admin)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Session::main_menu()                                                   │
//! │         │  option 1                                                     │
//! │         ▼                                                               │
//! │  session.new_order() -> AppResult<()>                                   │
//! │         │                                                               │
//! │         ├── prompts via session.console                                 │
//! │         ├── business rules via cafeteria-core                          │
//! │         └── persistence via session.store                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(())  → menu again                                                   │
//! │  Err(e)  → "❌ Error inesperado: ..." then menu again                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Expected problems (unknown id, bad quantity, short payment) are told to
//! the operator inside the command and return `Ok`. `Err` is for things
//! that went wrong underneath, like a failed write.

pub mod catalog;
pub mod history;
pub mod order;

use cafeteria_core::{Money, ValidationError};

/// Operator-facing text for a rejected input.
pub(crate) fn describe(err: &ValidationError) -> String {
    match (err, err.field()) {
        (ValidationError::Required { .. }, "name") => "El nombre no puede estar vacío".to_string(),
        (ValidationError::TooLong { max, .. }, "name") => {
            format!("El nombre no puede superar {} caracteres", max)
        }
        (ValidationError::MustBePositive { .. }, "price") => {
            "El precio debe ser mayor a 0".to_string()
        }
        (ValidationError::OutOfRange { max, .. }, "price") => {
            format!("El precio no puede superar {}", Money::from_major(*max))
        }
        (ValidationError::MustBePositive { .. }, "quantity") => {
            "La cantidad debe ser mayor a 0.".to_string()
        }
        (ValidationError::OutOfRange { max, .. }, "quantity") => {
            format!("La cantidad máxima por producto es {}.", max)
        }
        (ValidationError::OutOfRange { .. }, "subtotal") => {
            "El pedido supera el monto máximo permitido.".to_string()
        }
        _ => err.to_string(),
    }
}
