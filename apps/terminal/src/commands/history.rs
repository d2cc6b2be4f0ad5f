//! # Sales History Command
//!
//! Admin report of one day's sales, read straight from the ledger.
//!
//! ```text
//! 📅 Ventas del 2024-05-01
//! ==================================================
//!
//! 🧾 Venta #1 - 14:03:22
//! -------------------------
//!   2x Café Americano - $6,000
//!   1x Empanada - $2,500
//!   Descuento: -$850
//!   Total: $7,650
//! ==================================================
//! 💰 TOTAL DEL DÍA: $7,650
//! 📦 VENTAS REALIZADAS: 1
//! ```

use chrono::Local;
use std::io::{BufRead, Write};
use tracing::debug;

use cafeteria_core::validation::validate_date;
use cafeteria_core::DailySummary;

use crate::error::AppResult;
use crate::session::{Session, THIN_RULE, WIDE_RULE};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn sales_history(&mut self) -> AppResult<()> {
        if !self.authenticate()? {
            return Ok(());
        }

        self.console.say("\n📊 HISTORIAL DE VENTAS")?;
        self.console.say(THIN_RULE)?;

        let raw = self
            .console
            .read_line("Ingresa la fecha (YYYY-MM-DD) o Enter para hoy: ")?;
        let day = if raw.is_empty() {
            Local::now().date_naive()
        } else {
            match validate_date(&raw) {
                Ok(day) => day,
                Err(e) => {
                    debug!(input = %raw, error = %e, "Rejected history date");
                    self.console
                        .say("❌ Fecha no válida. Usa el formato YYYY-MM-DD")?;
                    return self.console.pause();
                }
            }
        };

        let records = self.store.ledger().query(day);
        if records.is_empty() {
            self.console
                .say(format!("❌ No hay ventas registradas para {}", day))?;
            return self.console.pause();
        }

        self.console.say(format!("\n📅 Ventas del {}", day))?;
        self.console.say(WIDE_RULE)?;

        for (n, sale) in records.iter().enumerate() {
            self.console.say(format!(
                "\n🧾 Venta #{} - {}",
                n + 1,
                sale.timestamp.format("%H:%M:%S")
            ))?;
            self.console.say("-".repeat(25))?;
            for item in &sale.items {
                self.console.say(format!(
                    "  {}x {} - {}",
                    item.quantity, item.product_name, item.subtotal
                ))?;
            }
            if sale.has_student_discount {
                self.console.say(format!("  Descuento: -{}", sale.discount))?;
            }
            self.console.say(format!("  Total: {}", sale.total))?;
        }

        let summary = DailySummary::from_records(day, &records);
        self.console.say(WIDE_RULE)?;
        self.console
            .say(format!("💰 TOTAL DEL DÍA: {}", summary.total))?;
        self.console
            .say(format!("📦 VENTAS REALIZADAS: {}", summary.count))?;
        self.console.say(WIDE_RULE)?;

        self.console.pause()
    }
}
