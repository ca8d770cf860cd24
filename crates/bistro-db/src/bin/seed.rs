//! # Seed Data Generator
//!
//! Populates a development database: menu from a CSV bootstrap file, plus
//! optional demo orders pushed through the full catalog → billing → ledger
//! pipeline.
//!
//! ## Usage
//! ```bash
//! # Seed the menu from data/menu.csv (default paths)
//! cargo run -p bistro-db --bin seed
//!
//! # Custom locations, with 12 demo orders
//! cargo run -p bistro-db --bin seed -- --db ./bistro_dev.db --menu ./data/menu.csv --orders 12
//! ```
//!
//! The menu seed is idempotent: a database that already has a menu is left
//! alone. Demo orders append to the ledger on every run.

use std::env;

use bistro_core::billing::compute_totals;
use bistro_core::{Catalog, NewOrder, OrderMode, Percent, ReportPeriod, DEFAULT_GST};
use bistro_db::{Database, DbConfig};

const MODES: &[OrderMode] = &[OrderMode::DineIn, OrderMode::TakeAway, OrderMode::Delivery];
const PAYMENTS: &[&str] = &["Cash", "Card", "UPI"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./bistro_dev.db");
    let mut menu_path = String::from("./data/menu.csv");
    let mut demo_orders: usize = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--menu" | "-m" => {
                if i + 1 < args.len() {
                    menu_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--orders" | "-o" => {
                if i + 1 < args.len() {
                    demo_orders = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bistro POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>      Database file path (default: ./bistro_dev.db)");
                println!("  -m, --menu <PATH>    Menu CSV path (default: ./data/menu.csv)");
                println!("  -o, --orders <N>     Demo orders to append (default: 0)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🍴 Bistro POS Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Menu:     {}", menu_path);
    println!();

    let source = std::fs::read_to_string(&menu_path)?;
    let catalog = Catalog::from_csv(&source)?;
    println!("✓ Parsed menu source ({} items)", catalog.len());

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    if db.menu().bootstrap(&catalog).await? {
        println!("✓ Menu seeded ({} items)", db.menu().count().await?);
    } else {
        println!("⚠ Menu already seeded ({} items), skipping", db.menu().count().await?);
    }

    if demo_orders > 0 {
        println!();
        println!("Appending {} demo orders...", demo_orders);

        // Demo orders come from the persisted menu, exactly like a till would.
        let catalog = db.menu().load_catalog().await?;
        let names: Vec<String> = catalog.items().map(|item| item.name.clone()).collect();
        if names.is_empty() {
            println!("⚠ Menu is empty, cannot build demo orders");
            return Ok(());
        }

        for n in 0..demo_orders {
            let lines = vec![
                catalog.make_line(&names[n % names.len()], 1 + (n % 3) as i64)?,
                catalog.make_line(&names[(n + 1) % names.len()], 1)?,
            ];
            // Every third order gets the house 10% discount.
            let discount = if n % 3 == 0 {
                Percent::from_bps(1000)
            } else {
                Percent::zero()
            };
            let totals = compute_totals(&lines, discount, DEFAULT_GST)?;
            let order = NewOrder::new(
                MODES[n % MODES.len()],
                PAYMENTS[n % PAYMENTS.len()],
                lines,
                totals,
            );
            let id = db.orders().create(&order).await?;
            println!("  order #{} ({}, {})", id, order.mode, order.totals.total());
        }

        println!();
        println!("Daily sales report:");
        let buckets = db.reports().sales(ReportPeriod::Daily).await?;
        println!("{}", serde_json::to_string_pretty(&buckets)?);
    }

    println!();
    println!("Done.");
    Ok(())
}
