//! # App Error Type
//!
//! Unified error type for the terminal session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Terminal                           │
//! │                                                                         │
//! │  Menu action (new order, add product, history)                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command function → AppResult<()>                                │  │
//! │  │         │                                                        │  │
//! │  │  Storage error? ─── StoreError::Io(...) ─────┐                  │  │
//! │  │         │                                     │                  │  │
//! │  │  Business error? ── CoreError::Insufficient ─ AppError ────────►│  │
//! │  │         │                                                        │  │
//! │  │  stdin closed? ──── AppError::InputClosed ──► session ends      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Main loop: prints "❌ Error: <message>", pauses, shows the menu again  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use cafeteria_core::{CoreError, ValidationError};
use cafeteria_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the terminal session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// Writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// terminal.toml could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config(message.into())
    }

    /// Whether the session should stop instead of returning to the menu.
    pub fn ends_session(&self) -> bool {
        matches!(self, AppError::InputClosed | AppError::Io(_))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type for terminal operations.
pub type AppResult<T> = Result<T, AppError>;
