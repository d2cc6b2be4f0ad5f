//! # Order Command
//!
//! Rings up one order: pick products, optional student discount, take
//! payment, record the sale.
//!
//! ## Flow
//! ```text
//! menu ──► id / quantity (repeat, 0 ends) ──► empty? ──► stop
//!                                                │
//!                                                ▼
//!                              student card? ──► summary ──► payment
//!                                                              │
//!                                 short ──► "Monto insuficiente", nothing saved
//!                                 enough ─► change, SalesLedger::record
//! ```

use std::io::{BufRead, Write};
use tracing::{debug, info};

use cafeteria_core::validation::validate_student_card;
use cafeteria_core::{CoreError, Order};

use super::describe;
use crate::error::AppResult;
use crate::session::{Session, WIDE_RULE};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new_order(&mut self) -> AppResult<()> {
        self.console.say("\n🛒 NUEVO PEDIDO")?;
        self.console.say(WIDE_RULE)?;

        let mut order = Order::new();
        self.show_products()?;
        self.collect_items(&mut order)?;

        if order.is_empty() {
            self.console.say("❌ No se agregaron productos al pedido.")?;
            return self.console.pause();
        }

        if self.console.confirm("\n🎓 ¿Tienes carné estudiantil?")? {
            let card = self.console.read_line("📄 Ingresa tu número de carné: ")?;
            match validate_student_card(&card) {
                Ok(()) => {
                    order.apply_student_discount();
                    self.console.say("✅ Descuento del 10% aplicado")?;
                }
                Err(_) => self.console.say("❌ Carné vacío, no se aplicó el descuento")?,
            }
        }

        self.show_summary(&order)?;

        let prompt = format!("\n💰 Total a pagar: {}\n💵 Monto recibido: $", order.total());
        let tendered = self.console.prompt_money(&prompt)?;

        let receipt = match order.finalize(tendered) {
            Ok(receipt) => receipt,
            Err(CoreError::InsufficientPayment { total, tendered }) => {
                debug!(%total, %tendered, "Payment short, sale not recorded");
                self.console.say("❌ Monto insuficiente.")?;
                return self.console.pause();
            }
            Err(e) => return Err(e.into()),
        };

        if receipt.change.is_zero() {
            self.console.say("✅ Pago exacto.")?;
        } else {
            self.console
                .say(format!("💸 Cambio a entregar: {}", receipt.change))?;
        }

        self.store.ledger().record(&receipt.record)?;
        info!(
            total = %receipt.record.total,
            items = receipt.record.items.len(),
            student = receipt.record.has_student_discount,
            "Order completed"
        );
        self.console.say("✅ Venta registrada exitosamente")?;
        self.console.pause()
    }

    /// Reads id/quantity pairs until the operator enters 0.
    fn collect_items(&mut self, order: &mut Order) -> AppResult<()> {
        loop {
            let id = self
                .console
                .prompt_int("\n📝 Ingresa el número del producto (0 para terminar): ")?;
            if id == 0 {
                return Ok(());
            }

            let Some(product) = self.find_product(id) else {
                self.console.say("❌ Producto no encontrado. Intenta de nuevo.")?;
                continue;
            };

            let quantity = self
                .console
                .prompt_int(&format!("📦 Cantidad de {}: ", product.name))?;

            match order.add_item(&product, quantity) {
                Ok(line) => {
                    let message = format!("✅ {}x {} agregado al pedido", line.quantity, line.name);
                    self.console.say(message)?;
                }
                Err(CoreError::Validation(e)) => self.console.say(format!("❌ {}", describe(&e)))?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn show_summary(&mut self, order: &Order) -> AppResult<()> {
        self.console.say(format!("\n{}", WIDE_RULE))?;
        self.console.say("           RESUMEN DEL PEDIDO")?;
        self.console.say(WIDE_RULE)?;
        for item in order.items() {
            self.console.say(format!("  {}", item))?;
        }
        self.console.say("-".repeat(50))?;
        self.console.say(format!("  Subtotal: {}", order.subtotal()))?;
        if order.has_student_discount() {
            self.console.say(format!(
                "  Descuento estudiante (10%): -{}",
                order.discount()
            ))?;
        }
        self.console.say(format!("  TOTAL: {}", order.total()))?;
        self.console.say(WIDE_RULE)
    }
}

#[cfg(test)]
mod tests {
    use crate::session::testing::{run_to_end, scripted};
    use cafeteria_core::Money;

    fn today() -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }

    #[test]
    fn test_student_order_is_recorded() {
        // 2x Café Americano, 1x Empanada, student card, pay 8000
        let (_dir, session) = scripted("1\n1\n2\n3\n1\n0\ns\nA-2023-042\n8000\n\n0\n");
        let finished = run_to_end(session);
        let output = &finished.output;

        assert!(output.contains("✅ 2x Café Americano agregado al pedido"));
        assert!(output.contains("✅ Descuento del 10% aplicado"));
        assert!(output.contains("  Subtotal: $8,500"));
        assert!(output.contains("  Descuento estudiante (10%): -$850"));
        assert!(output.contains("  TOTAL: $7,650"));
        assert!(output.contains("💸 Cambio a entregar: $350"));
        assert!(output.contains("✅ Venta registrada exitosamente"));

        let records = finished.store.ledger().query(today());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total, Money::from_major(7650));
        assert!(records[0].has_student_discount);
    }

    #[test]
    fn test_exact_payment_without_discount() {
        let (_dir, session) = scripted("1\n5\n1\n0\nn\n3500\n\n0\n");
        let finished = run_to_end(session);

        assert!(finished.output.contains("✅ Pago exacto."));
        assert!(!finished.output.contains("Descuento estudiante"));
        assert_eq!(finished.store.ledger().daily_total(today()), Money::from_major(3500));
    }

    #[test]
    fn test_insufficient_payment_is_not_recorded() {
        let (_dir, session) = scripted("1\n2\n1\n0\nn\n5000\n\n0\n");
        let finished = run_to_end(session);

        assert!(finished.output.contains("❌ Monto insuficiente."));
        assert!(finished.store.ledger().query(today()).is_empty());
    }

    #[test]
    fn test_bad_entries_are_reported() {
        // Unknown id, zero quantity, then a valid line
        let (_dir, session) = scripted("1\n42\n1\n0\n1\n1\n0\nn\n3000\n\n0\n");
        let finished = run_to_end(session);

        assert!(finished.output.contains("❌ Producto no encontrado. Intenta de nuevo."));
        assert!(finished.output.contains("❌ La cantidad debe ser mayor a 0."));
        assert_eq!(finished.store.ledger().daily_count(today()), 1);
    }

    #[test]
    fn test_quantity_over_limit_is_refused() {
        let (_dir, session) = scripted("1\n3\n1000\n3\n999\n0\nn\n2497500\n\n0\n");
        let finished = run_to_end(session);

        assert!(finished.output.contains("❌ La cantidad máxima por producto es 999."));
        assert!(finished.output.contains("✅ 999x Empanada agregado al pedido"));
        let records = finished.store.ledger().query(today());
        assert_eq!(records[0].total, Money::from_major(2_497_500));
    }

    #[test]
    fn test_blank_student_card_gives_no_discount() {
        let (_dir, session) = scripted("1\n3\n2\n0\ns\n   \n5000\n\n0\n");
        let finished = run_to_end(session);

        assert!(finished.output.contains("❌ Carné vacío"));
        let records = finished.store.ledger().query(today());
        assert_eq!(records[0].discount, Money::zero());
        assert_eq!(records[0].total, Money::from_major(5000));
    }

    #[test]
    fn test_empty_order_never_reaches_payment() {
        let (_dir, session) = scripted("1\n0\n\n0\n");
        let finished = run_to_end(session);

        assert!(finished.output.contains("❌ No se agregaron productos al pedido."));
        assert!(!finished.output.contains("Monto recibido"));
    }

    #[test]
    fn test_input_ending_mid_order_records_nothing() {
        let (_dir, session) = scripted("1\n1\n2\n");
        let finished = run_to_end(session);
        assert!(finished.store.ledger().query(today()).is_empty());
    }
}
