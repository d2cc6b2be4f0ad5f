//! End-to-end flows across core and storage: open a data directory, ring
//! up orders, record them and read the day back.

use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

use cafeteria_core::{Catalog, CoreError, Money, Order};
use cafeteria_store::{CatalogManager, Confirmation, DataStore, StoreConfig};

fn open_store() -> (TempDir, DataStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = DataStore::open(StoreConfig::new(dir.path().join("data"))).expect("open store");
    (dir, store)
}

fn at(day: NaiveDate, h: u32, m: u32) -> chrono::NaiveDateTime {
    day.and_hms_opt(h, m, 0).unwrap()
}

#[test]
fn student_order_is_recorded_with_discount_and_change() {
    let (_dir, store) = open_store();
    let catalog = store.catalog().load().unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let mut order = Order::with_timestamp(at(day, 14, 3));
    order.add_item(catalog.find(1).unwrap(), 2).unwrap();
    order.add_item(catalog.find(3).unwrap(), 1).unwrap();
    assert!(order.apply_student_discount());

    let receipt = order.finalize(Money::from_major(8000)).unwrap();
    assert_eq!(receipt.change, Money::from_major(350));
    store.ledger().record(&receipt.record).unwrap();

    let records = store.ledger().query(day);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].subtotal, Money::from_major(8500));
    assert_eq!(records[0].discount, Money::from_major(850));
    assert_eq!(records[0].total, Money::from_major(7650));
    assert!(records[0].has_student_discount);

    let raw = fs::read_to_string(store.ledger().path_for(day)).unwrap();
    assert!(raw.contains("\"fecha_hora\": \"2024-05-01T14:03:00.000000\""));
    assert!(raw.contains("\"descuento\": 850"));
    assert!(raw.contains("\"tiene_descuento_estudiante\": true"));
}

#[test]
fn insufficient_payment_records_nothing() {
    let (_dir, store) = open_store();
    let catalog = store.catalog().load().unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();

    let mut order = Order::with_timestamp(at(day, 9, 0));
    order.add_item(catalog.find(2).unwrap(), 1).unwrap();

    let result = order.finalize(Money::from_major(5000));
    assert!(matches!(result, Err(CoreError::InsufficientPayment { .. })));
    assert!(store.ledger().query(day).is_empty());
    assert!(!store.ledger().path_for(day).exists());
}

#[test]
fn daily_summary_spans_multiple_sales() {
    let (_dir, store) = open_store();
    let catalog = store.catalog().load().unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
    let ledger = store.ledger();

    for (minute, (id, qty)) in [(4, 2), (5, 1), (1, 3)].into_iter().enumerate() {
        let mut order = Order::with_timestamp(at(day, 12, minute as u32));
        order.add_item(catalog.find(id).unwrap(), qty).unwrap();
        let total = order.total();
        ledger.record(&order.finalize(total).unwrap().record).unwrap();
    }

    // Other days are kept apart
    let other = NaiveDate::from_ymd_opt(2024, 5, 4).unwrap();
    let mut order = Order::with_timestamp(at(other, 8, 0));
    order.add_item(catalog.find(3).unwrap(), 1).unwrap();
    ledger.record(&order.finalize(Money::from_major(2500)).unwrap().record).unwrap();

    let summary = ledger.daily_summary(day);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.total, Money::from_major(8000 + 3500 + 9000));
    assert_eq!(ledger.daily_count(other), 1);
}

#[test]
fn query_for_day_without_file_is_empty() {
    let (_dir, store) = open_store();
    let day = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    assert!(store.ledger().query(day).is_empty());
    assert_eq!(store.ledger().daily_total(day), Money::zero());
}

#[test]
fn corrupt_catalog_is_replaced_with_defaults() {
    let (_dir, store) = open_store();
    fs::write(store.catalog().path(), "").unwrap();

    let catalog = store.catalog().load().unwrap();
    assert_eq!(catalog, Catalog::seed());

    let raw = fs::read_to_string(store.catalog().path()).unwrap();
    assert!(raw.contains("Croissant"));
}

#[test]
fn save_of_loaded_catalog_is_a_no_op() {
    let (_dir, store) = open_store();
    let catalog = store.catalog().load().unwrap();
    let before = fs::read_to_string(store.catalog().path()).unwrap();

    store.catalog().save(&catalog).unwrap();

    assert_eq!(fs::read_to_string(store.catalog().path()).unwrap(), before);
    assert_eq!(store.catalog().load().unwrap(), catalog);
}

#[test]
fn deleting_highest_id_frees_it_for_reuse() {
    let (_dir, store) = open_store();
    let manager = CatalogManager::new(store.catalog());
    let mut catalog = Catalog::default();

    for name in ["Uno", "Dos", "Tres"] {
        manager.create(&mut catalog, name, Money::from_major(1000)).unwrap();
    }
    manager.delete(&mut catalog, 3, Confirmation::Confirmed).unwrap();

    let product = manager
        .create(&mut catalog, "Cuatro", Money::from_major(1000))
        .unwrap();
    assert_eq!(product.id, 3);
    assert_eq!(store.catalog().load().unwrap(), catalog);
}

#[test]
fn catalog_edits_do_not_touch_open_order() {
    let (_dir, store) = open_store();
    let manager = CatalogManager::new(store.catalog());
    let mut catalog = store.catalog().load().unwrap();

    let mut order = Order::new();
    order.add_item(catalog.find(4).unwrap(), 1).unwrap();

    manager
        .update(
            &mut catalog,
            4,
            cafeteria_store::ProductUpdate {
                name: None,
                price: Some(Money::from_major(4500)),
            },
        )
        .unwrap();

    assert_eq!(order.subtotal(), Money::from_major(4000));
    let receipt = order.finalize(Money::from_major(4000)).unwrap();
    assert_eq!(receipt.change, Money::zero());
}
