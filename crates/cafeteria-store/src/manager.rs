//! # Catalog Manager
//!
//! Create, update and delete products, writing the catalog through to disk
//! after every change.
//!
//! ## Write-Through
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  manager.create(&mut catalog, "Té", price)                              │
//! │       │                                                                 │
//! │       ├── validate name / price ──► StoreError::Validation (no change)  │
//! │       ▼                                                                 │
//! │  catalog.push(product)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogStore::save(&catalog)                                           │
//! │       ├── Ok  ──► product returned                                      │
//! │       └── Err ──► catalog restored to its previous state, Err returned  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use cafeteria_core::validation::{validate_price, validate_product_name};
use cafeteria_core::{Catalog, Money, Product, ProductId, ValidationError};

use crate::error::{StoreError, StoreResult};
use crate::repository::catalog::CatalogStore;

/// Fields to change on an existing product. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Money>,
}

/// Result of [`CatalogManager::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The product as it is now.
    pub product: Product,
    /// Whether anything was written.
    pub changed: bool,
    /// Fields that were supplied but failed validation and were left alone.
    pub rejected: Vec<ValidationError>,
}

/// Whether the operator confirmed a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Product),
    Cancelled,
}

/// Product administration against a [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct CatalogManager {
    store: CatalogStore,
}

impl CatalogManager {
    pub fn new(store: CatalogStore) -> Self {
        CatalogManager { store }
    }

    /// Adds a product with the next free id.
    pub fn create(&self, catalog: &mut Catalog, name: &str, price: Money) -> StoreResult<Product> {
        let name = validate_product_name(name)?;
        validate_price(price)?;

        let id = catalog.next_id().ok_or_else(|| ValidationError::OutOfRange {
            field: "id".to_string(),
            min: 1,
            max: ProductId::MAX as i64,
        })?;
        let product = Product::new(id, name, price);
        let before = catalog.clone();
        catalog.push(product.clone());
        self.commit(catalog, before)?;

        info!(id = product.id, name = %product.name, price = %product.price, "Product created");
        Ok(product)
    }

    /// Applies whichever fields of `update` are valid.
    ///
    /// A bad name does not block a good price and vice versa; rejected
    /// fields come back in the outcome instead of failing the call.
    pub fn update(
        &self,
        catalog: &mut Catalog,
        id: ProductId,
        update: ProductUpdate,
    ) -> StoreResult<UpdateOutcome> {
        let before = catalog.clone();
        let product = catalog
            .find_mut(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        let mut changed = false;
        let mut rejected = Vec::new();

        if let Some(name) = update.name {
            match validate_product_name(&name) {
                Ok(name) if name != product.name => {
                    product.name = name;
                    changed = true;
                }
                Ok(_) => {}
                Err(e) => rejected.push(e),
            }
        }

        if let Some(price) = update.price {
            match validate_price(price) {
                Ok(()) if price != product.price => {
                    product.price = price;
                    changed = true;
                }
                Ok(()) => {}
                Err(e) => rejected.push(e),
            }
        }

        let product = product.clone();
        if changed {
            self.commit(catalog, before)?;
            info!(id, name = %product.name, price = %product.price, "Product updated");
        }

        Ok(UpdateOutcome {
            product,
            changed,
            rejected,
        })
    }

    /// Removes a product once the operator has confirmed.
    pub fn delete(
        &self,
        catalog: &mut Catalog,
        id: ProductId,
        confirmation: Confirmation,
    ) -> StoreResult<DeleteOutcome> {
        if catalog.find(id).is_none() {
            return Err(StoreError::not_found("Product", id));
        }
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }

        let before = catalog.clone();
        let removed = catalog
            .remove(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;
        self.commit(catalog, before)?;

        info!(id, name = %removed.name, "Product deleted");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Saves `catalog`, putting `before` back in place if the write fails.
    fn commit(&self, catalog: &mut Catalog, before: Catalog) -> StoreResult<()> {
        if let Err(e) = self.store.save(catalog) {
            *catalog = before;
            return Err(e);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CatalogStore, CatalogManager, Catalog) {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("productos.json"));
        let catalog = store.load().unwrap();
        let manager = CatalogManager::new(store.clone());
        (dir, store, manager, catalog)
    }

    #[test]
    fn test_create_assigns_next_id_and_persists() {
        let (_dir, store, manager, mut catalog) = setup();

        let product = manager
            .create(&mut catalog, "  Té Verde ", Money::from_major(2000))
            .unwrap();

        assert_eq!(product.id, 6);
        assert_eq!(product.name, "Té Verde");
        assert_eq!(store.load().unwrap(), catalog);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let (_dir, _store, manager, mut catalog) = setup();

        let err = manager
            .create(&mut catalog, "   ", Money::from_major(100))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::Required { .. })));

        let err = manager
            .create(&mut catalog, "Agua", Money::zero())
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::MustBePositive { .. })));

        let err = manager
            .create(&mut catalog, "Banquete", "1000000000000".parse().unwrap())
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::OutOfRange { .. })));

        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_update_applies_valid_fields_only() {
        let (_dir, store, manager, mut catalog) = setup();

        let outcome = manager
            .update(
                &mut catalog,
                3,
                ProductUpdate {
                    name: Some(String::new()),
                    price: Some(Money::from_major(2800)),
                },
            )
            .unwrap();

        assert!(outcome.changed);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].field(), "name");
        assert_eq!(outcome.product.name, "Empanada");
        assert_eq!(outcome.product.price, Money::from_major(2800));
        assert_eq!(store.load().unwrap().find(3).unwrap().price, Money::from_major(2800));
    }

    #[test]
    fn test_update_without_changes_does_not_write() {
        let (_dir, store, manager, mut catalog) = setup();
        std::fs::remove_file(store.path()).unwrap();

        let outcome = manager
            .update(&mut catalog, 1, ProductUpdate::default())
            .unwrap();

        assert!(!outcome.changed);
        assert!(!store.exists());
    }

    #[test]
    fn test_update_unknown_id() {
        let (_dir, _store, manager, mut catalog) = setup();
        let err = manager
            .update(&mut catalog, 99, ProductUpdate::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_dir, store, manager, mut catalog) = setup();

        let outcome = manager.delete(&mut catalog, 2, Confirmation::Declined).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(catalog.len(), 5);

        let outcome = manager.delete(&mut catalog, 2, Confirmation::Confirmed).unwrap();
        match outcome {
            DeleteOutcome::Deleted(p) => assert_eq!(p.name, "Sandwich de Jamón"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(store.load().unwrap().find(2).is_none());

        assert!(matches!(
            manager.delete(&mut catalog, 2, Confirmation::Confirmed),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_failed_save_restores_catalog() {
        let dir = TempDir::new().unwrap();
        // Parent "directory" is a regular file, so every save fails
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let manager = CatalogManager::new(CatalogStore::new(blocker.join("productos.json")));

        let mut catalog = Catalog::seed();
        assert!(manager
            .create(&mut catalog, "Agua", Money::from_major(1000))
            .is_err());
        assert_eq!(catalog, Catalog::seed());
    }
}
