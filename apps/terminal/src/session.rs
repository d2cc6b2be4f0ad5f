//! # Session
//!
//! The interactive menu loop and the state it carries between actions.
//!
//! ## Session State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Session<R, W>                                  │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │   Console    │ │   Catalog    │ │  DataStore   │ │ Authenticator│   │
//! │  │              │ │              │ │              │ │  + unlocked  │   │
//! │  │ prompts, I/O │ │ owned, kept  │ │ productos,   │ │              │   │
//! │  │              │ │ in sync with │ │ ventas/      │ │ asked once   │   │
//! │  │              │ │ productos    │ │              │ │ per session  │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Main menu                                                              │
//! │  1 → commands::order::new_order                                        │
//! │  2 → commands::catalog::manage_products   (admin)                      │
//! │  3 → commands::history::sales_history     (admin)                      │
//! │  0 → quit                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failing action is reported and the menu comes back. Only closed input
//! or a broken terminal ends the loop early.

use std::io::{BufRead, Write};
use tracing::{error, info, warn};

use cafeteria_core::{Authenticator, Catalog, Product};
use cafeteria_store::DataStore;

use crate::console::Console;
use crate::error::{AppError, AppResult};

pub(crate) const WIDE_RULE: &str = "==================================================";
pub(crate) const RULE: &str = "========================================";
pub(crate) const THIN_RULE: &str = "------------------------------";

pub struct Session<R, W> {
    pub(crate) console: Console<R, W>,
    pub(crate) catalog: Catalog,
    pub(crate) store: DataStore,
    auth: Box<dyn Authenticator>,
    unlocked: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        console: Console<R, W>,
        catalog: Catalog,
        store: DataStore,
        auth: impl Authenticator + 'static,
    ) -> Self {
        Session {
            console,
            catalog,
            store,
            auth: Box::new(auth),
            unlocked: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until the operator quits or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            match self.main_menu() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(AppError::InputClosed) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Shows the main menu and runs one action. `Ok(false)` means quit.
    fn main_menu(&mut self) -> AppResult<bool> {
        self.console.clear_screen()?;
        self.console.say("☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕")?;
        self.console.say("    SISTEMA CAFETERÍA CAMPUS")?;
        self.console.say("☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕☕")?;
        self.console.say("\n📋 MENÚ PRINCIPAL")?;
        self.console.say(RULE)?;
        self.console.say("1. 🛒 Nuevo Pedido")?;
        self.console.say("2. ⚙️  Gestionar Productos")?;
        self.console.say("3. 📊 Ver Historial de Ventas")?;
        self.console.say("0. 🚪 Salir")?;
        self.console.say(RULE)?;

        let result = match self.console.prompt_int("Selecciona una opción: ")? {
            1 => self.new_order(),
            2 => self.manage_products(),
            3 => self.sales_history(),
            0 => {
                self.console
                    .say("\n👋 ¡Gracias por usar el Sistema Cafetería Campus!")?;
                return Ok(false);
            }
            _ => {
                self.console.say("❌ Opción no válida. Intenta de nuevo.")?;
                self.console.pause()
            }
        };

        match result {
            Ok(()) => Ok(true),
            Err(e) if e.ends_session() => Err(e),
            Err(e) => {
                error!(error = %e, "Menu action failed");
                self.console.say(format!("❌ Error inesperado: {}", e))?;
                self.console.pause()?;
                Ok(true)
            }
        }
    }

    /// Asks for the admin passcode unless this session already passed.
    pub(crate) fn authenticate(&mut self) -> AppResult<bool> {
        if self.unlocked {
            return Ok(true);
        }

        self.console.say("\n🔐 Acceso de Administrador")?;
        self.console.say(THIN_RULE)?;
        let secret = self.console.read_line("Ingresa la clave de administrador: ")?;

        if self.auth.verify(&secret) {
            self.unlocked = true;
            info!("Admin access granted");
            self.console.say("✅ Autenticación exitosa")?;
            Ok(true)
        } else {
            warn!("Admin access denied");
            self.console.say("❌ Clave incorrecta")?;
            self.console.pause()?;
            Ok(false)
        }
    }

    /// Prints the catalog as a numbered menu.
    pub(crate) fn show_products(&mut self) -> AppResult<()> {
        self.console.say("\n🍽️  MENÚ DE PRODUCTOS")?;
        self.console.say(RULE)?;
        for product in self.catalog.iter() {
            self.console.say(format!("  {}", product))?;
        }
        self.console.say(RULE)?;
        Ok(())
    }

    /// Looks up a product by the number the operator typed.
    pub(crate) fn find_product(&self, raw_id: i64) -> Option<Product> {
        u32::try_from(raw_id)
            .ok()
            .and_then(|id| self.catalog.find(id))
            .cloned()
    }
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use cafeteria_core::StaticPasscode;
    use cafeteria_store::StoreConfig;
    use std::io::Cursor;
    use tempfile::TempDir;

    pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    /// What is left of a session after it ran out of input.
    pub struct Finished {
        pub catalog: Catalog,
        pub store: DataStore,
        pub unlocked: bool,
        pub output: String,
    }

    /// A session over a fresh seeded data directory, reading `input`.
    pub fn scripted(input: &str) -> (TempDir, ScriptedSession) {
        let dir = TempDir::new().unwrap();
        let store = DataStore::open(StoreConfig::new(dir.path().join("data"))).unwrap();
        let catalog = store.catalog().load().unwrap();
        let console =
            Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_clear_screen(false);

        (dir, Session::new(console, catalog, store, StaticPasscode::new("123")))
    }

    /// Runs the session to completion.
    pub fn run_to_end(mut session: ScriptedSession) -> Finished {
        session.run().unwrap();

        let Session {
            console,
            catalog,
            store,
            unlocked,
            ..
        } = session;
        Finished {
            catalog,
            store,
            unlocked,
            output: String::from_utf8(console.into_output()).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{run_to_end, scripted};

    #[test]
    fn test_quit_immediately() {
        let (_dir, session) = scripted("0\n");
        let output = run_to_end(session).output;
        assert!(output.contains("MENÚ PRINCIPAL"));
        assert!(output.contains("¡Gracias por usar el Sistema Cafetería Campus!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_dir, session) = scripted("");
        let output = run_to_end(session).output;
        assert!(output.contains("Selecciona una opción: "));
    }

    #[test]
    fn test_invalid_option_returns_to_menu() {
        let (_dir, session) = scripted("9\n\nabc\n0\n");
        let output = run_to_end(session).output;
        assert!(output.contains("❌ Opción no válida. Intenta de nuevo."));
        assert!(output.contains("❌ Por favor ingresa un número válido."));
        assert_eq!(output.matches("MENÚ PRINCIPAL").count(), 2);
    }

    #[test]
    fn test_passcode_is_asked_once() {
        // Wrong code, then right code, then product list twice
        let (_dir, session) = scripted("2\nxxx\n\n2\n123\n1\n\n0\n2\n1\n\n0\n0\n");
        let finished = run_to_end(session);
        let output = finished.output;

        assert!(finished.unlocked);
        assert_eq!(output.matches("❌ Clave incorrecta").count(), 1);
        assert_eq!(output.matches("✅ Autenticación exitosa").count(), 1);
        assert_eq!(output.matches("GESTIÓN DE PRODUCTOS").count(), 4);
    }

    #[test]
    fn test_find_product_rejects_out_of_range_ids() {
        let (_dir, session) = scripted("");
        assert!(session.find_product(1).is_some());
        assert!(session.find_product(-1).is_none());
        assert!(session.find_product(i64::MAX).is_none());
    }
}
