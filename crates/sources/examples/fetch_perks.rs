//! Example: Fetch and validate a perk dataset
//!
//! Run with: cargo run --package sources --example fetch_perks
//!
//! This example shows how to:
//! 1. Point a JsonFileSource at a dataset
//! 2. Fetch the raw payload
//! 3. Validate it into a Catalog
//! 4. Display the records and distinct merchants

use catalog::validate;
use sources::{JsonFileSource, PerkSource};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("=== Perk Explorer Fetch Example ===\n");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/perks.json".to_string());

    println!("Fetching perks from {}...", path);
    let start = Instant::now();
    let source = JsonFileSource::new(&path);
    let raw = source.fetch_all().await?;
    println!("Fetched {} raw perks in {:?}\n", raw.len(), start.elapsed());

    let catalog = validate::build_catalog(raw)?;

    println!("Validated catalog: {} perks", catalog.len());
    for perk in catalog.perks() {
        println!("  {} — {} [{}]", perk.id, perk.title, perk.merchant);
    }

    println!("\nMerchants:");
    for merchant in catalog.merchants() {
        println!("  - {}", merchant);
    }

    Ok(())
}
