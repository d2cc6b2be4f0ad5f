//! # Cafeteria Terminal Library
//!
//! Core library for the cafeteria POS terminal application.
//! `main.rs` only calls [`run`] and reports a startup failure.
//!
//! ## Module Organization
//! ```text
//! cafeteria_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── terminal.toml + environment
//! ├── console.rs      ◄─── Prompts over BufRead / Write
//! ├── session.rs      ◄─── Main menu loop, admin gate
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── order.rs    ◄─── New order → payment → ledger
//! │   ├── catalog.rs  ◄─── Product administration
//! │   └── history.rs  ◄─── Daily sales report
//! └── error.rs        ◄─── AppError for the session
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cafeteria_core::{Catalog, StaticPasscode};
use cafeteria_store::DataStore;

use config::TerminalConfig;
use console::Console;
use error::AppResult;
use session::Session;

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, info for cafeteria crates; RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • terminal.toml + CAFETERIA_* variables, defaults on failure        │
/// │                                                                         │
/// │  3. Open Data Directory ──────────────────────────────────────────────► │
/// │     • Creates data/ and data/ventas/ if missing                         │
/// │                                                                         │
/// │  4. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • Seeds productos.json when absent or corrupt                       │
/// │     • Unreadable file: default products in memory only                  │
/// │                                                                         │
/// │  5. Run Session ──────────────────────────────────────────────────────► │
/// │     • Until "0. Salir" or end of input                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Cafeteria POS terminal");

    let config = TerminalConfig::load_or_default(None);
    let store = DataStore::open(config.store_config())?;

    let catalog = store.catalog().load().unwrap_or_else(|e| {
        error!(error = %e, "Could not load catalog, using default products");
        Catalog::seed()
    });
    info!(products = catalog.len(), data_dir = %store.data_dir().display(), "Catalog ready");

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout())
        .with_clear_screen(config.display.clear_screen);
    let auth = StaticPasscode::new(config.admin.passcode.clone());

    let mut session = Session::new(console, catalog, store, auth);
    session.run()?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cafeteria_store=debug` - Debug for the store crate only
/// - Default: warnings, plus info from the cafeteria crates
///
/// Logs go to stderr so they never land in the middle of a menu.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,cafeteria_core=info,cafeteria_store=info,cafeteria_terminal=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
