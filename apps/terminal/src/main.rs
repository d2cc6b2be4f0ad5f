//! # Cafeteria Terminal Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cafeteria POS Terminal                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    stdin / stdout                                │  │
//! │  │  • Main menu            • Order entry                            │  │
//! │  │  • Product admin        • Sales history                          │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run(), reports startup failures             │  │
//! │  │  lib.rs ─────► Logging, config, data directory, session          │  │
//! │  │  commands/ ──► new_order, manage_products, sales_history         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         Data Directory                           │  │
//! │  │  data/productos.json, data/ventas/ventas_<date>.json             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match cafeteria_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error crítico: {}", e);
            wait_for_enter();
            ExitCode::FAILURE
        }
    }
}

/// Keeps the window open long enough to read the error.
fn wait_for_enter() {
    print!("Presiona Enter para salir...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
