//! # Catalog Seeder
//!
//! Writes the default product catalog into a data directory.
//!
//! ## Usage
//! ```bash
//! # Seed ./data (skips if a catalog already exists)
//! cargo run -p cafeteria-store --bin seed
//!
//! # Seed another directory
//! cargo run -p cafeteria-store --bin seed -- --data-dir /srv/cafeteria
//!
//! # Replace an existing catalog
//! cargo run -p cafeteria-store --bin seed -- --force
//! ```

use std::env;

use cafeteria_core::Catalog;
use cafeteria_store::{DataStore, StoreConfig, DEFAULT_DATA_DIR};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from(DEFAULT_DATA_DIR);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Cafeteria POS Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Data directory (default: {})", DEFAULT_DATA_DIR);
                println!("  -f, --force            Overwrite an existing catalog");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("🌱 Cafeteria POS Catalog Seeder");
    println!("===============================");
    println!("Data directory: {}", data_dir);
    println!();

    let store = DataStore::open(StoreConfig::new(&data_dir))?;
    let catalog_store = store.catalog();

    if catalog_store.exists() && !force {
        println!("⚠ {} already exists", catalog_store.path().display());
        println!("  Skipping seed to avoid overwriting it.");
        println!("  Run with --force to replace it.");
        return Ok(());
    }

    let catalog = Catalog::seed();
    catalog_store.save(&catalog)?;

    for product in catalog.iter() {
        println!("  {}", product);
    }
    println!();
    println!("✓ Wrote {} products to {}", catalog.len(), catalog_store.path().display());

    Ok(())
}
