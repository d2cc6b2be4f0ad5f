//! # Product Management Commands
//!
//! Admin submenu: list, add, modify and delete products. Every change goes
//! through [`CatalogManager`], which writes `productos.json` immediately.

use std::io::{BufRead, Write};

use cafeteria_core::Money;
use cafeteria_store::{CatalogManager, Confirmation, DeleteOutcome, ProductUpdate, StoreError};

use super::describe;
use crate::error::AppResult;
use crate::session::{Session, RULE, THIN_RULE};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn manage_products(&mut self) -> AppResult<()> {
        if !self.authenticate()? {
            return Ok(());
        }

        loop {
            self.console.clear_screen()?;
            self.console.say("\n⚙️  GESTIÓN DE PRODUCTOS")?;
            self.console.say(RULE)?;
            self.console.say("1. Ver productos")?;
            self.console.say("2. Agregar producto")?;
            self.console.say("3. Modificar producto")?;
            self.console.say("4. Eliminar producto")?;
            self.console.say("0. Volver al menú principal")?;
            self.console.say(RULE)?;

            match self.console.prompt_int("Selecciona una opción: ")? {
                1 => {
                    self.show_products()?;
                    self.console.pause()?;
                }
                2 => self.add_product()?,
                3 => self.modify_product()?,
                4 => self.delete_product()?,
                0 => return Ok(()),
                _ => {
                    self.console.say("❌ Opción no válida")?;
                    self.console.pause()?;
                }
            }
        }
    }

    fn manager(&self) -> CatalogManager {
        CatalogManager::new(self.store.catalog())
    }

    fn add_product(&mut self) -> AppResult<()> {
        self.console.say("\n➕ AGREGAR PRODUCTO")?;
        self.console.say(THIN_RULE)?;

        let name = self.console.read_line("Nombre del producto: ")?;
        if name.is_empty() {
            self.console.say("❌ El nombre no puede estar vacío")?;
            return self.console.pause();
        }
        let price = self.console.prompt_money("Precio del producto: $")?;

        match self.manager().create(&mut self.catalog, &name, price) {
            Ok(product) => {
                let message = format!("✅ Producto '{}' agregado exitosamente", product.name);
                self.console.say(message)?;
            }
            Err(StoreError::Validation(e)) => self.console.say(format!("❌ {}", describe(&e)))?,
            Err(e) => return Err(e.into()),
        }
        self.console.pause()
    }

    fn modify_product(&mut self) -> AppResult<()> {
        self.console.say("\n✏️  MODIFICAR PRODUCTO")?;
        self.console.say(THIN_RULE)?;
        self.show_products()?;

        let id = self
            .console
            .prompt_int("\nIngresa el ID del producto a modificar: ")?;
        let Some(current) = self.find_product(id) else {
            self.console.say("❌ Producto no encontrado")?;
            return self.console.pause();
        };

        self.console.say(format!("\nProducto actual: {}", current))?;

        // Blank answers keep the current value
        let name = self
            .console
            .read_line(&format!("Nuevo nombre (actual: {}): ", current.name))?;
        let raw_price = self
            .console
            .read_line(&format!("Nuevo precio (actual: {}): ", current.price))?;

        let price = if raw_price.is_empty() {
            None
        } else {
            match raw_price.parse::<Money>() {
                Ok(price) => Some(price),
                Err(_) => {
                    self.console.say("❌ Precio no válido")?;
                    None
                }
            }
        };

        let update = ProductUpdate {
            name: (!name.is_empty()).then_some(name),
            price,
        };
        let outcome = self.manager().update(&mut self.catalog, current.id, update)?;

        for rejected in &outcome.rejected {
            self.console.say(format!("❌ {}", describe(rejected)))?;
        }
        if outcome.changed {
            self.console.say("✅ Producto modificado exitosamente")?;
        } else {
            self.console.say("ℹ️  No se realizaron cambios")?;
        }
        self.console.pause()
    }

    fn delete_product(&mut self) -> AppResult<()> {
        self.console.say("\n🗑️  ELIMINAR PRODUCTO")?;
        self.console.say(THIN_RULE)?;
        self.show_products()?;

        let id = self
            .console
            .prompt_int("\nIngresa el ID del producto a eliminar: ")?;
        let Some(product) = self.find_product(id) else {
            self.console.say("❌ Producto no encontrado")?;
            return self.console.pause();
        };

        let confirmed = self
            .console
            .confirm(&format!("¿Confirmas eliminar '{}'?", product.name))?;

        match self
            .manager()
            .delete(&mut self.catalog, product.id, Confirmation::from(confirmed))?
        {
            DeleteOutcome::Deleted(_) => self.console.say("✅ Producto eliminado exitosamente")?,
            DeleteOutcome::Cancelled => self.console.say("❌ Eliminación cancelada")?,
        }
        self.console.pause()
    }
}
