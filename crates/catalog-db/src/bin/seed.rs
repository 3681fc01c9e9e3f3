//! # Seed Data Generator
//!
//! Populates a development database with a small catalog.
//!
//! ## Usage
//! ```bash
//! # Default database path (./catalog_dev.db)
//! cargo run -p catalog-db --bin seed
//!
//! # Custom path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! Everything goes through the repository API, so the seed run exercises
//! the same code paths the service does: brand/category resolution, slug
//! derivation, feature creation, publication links, and the FTS index.

use serde_json::json;
use std::env;

use catalog_core::{FeatureInput, ImageInput, ProductInput, PublicationInput};
use catalog_db::{Database, DbConfig};

/// (name, price, discount, brand, category, feature name, feature value)
const PRODUCTS: &[(&str, i64, i64, &str, &str, &str, &str)] = &[
    (
        "Perilica rublja 8kg",
        39900,
        0,
        "Gorenje",
        "Bijela tehnika",
        "Kapacitet",
        "8 kg",
    ),
    (
        "Perilica posuđa 60cm",
        45900,
        10,
        "Bosch",
        "Bijela tehnika",
        "Širina",
        "60 cm",
    ),
    (
        "Hladnjak kombinirani",
        52900,
        0,
        "Gorenje",
        "Bijela tehnika",
        "Volumen",
        "320 l",
    ),
    (
        "Samsung Galaxy S21",
        79900,
        15,
        "Samsung",
        "Mobiteli",
        "Zaslon",
        "6.2\"",
    ),
    (
        "Samsung punjač 25W",
        2900,
        0,
        "Samsung",
        "Mobiteli",
        "Snaga",
        "25 W",
    ),
    (
        "Televizor 55\" 4K",
        64900,
        20,
        "Samsung",
        "Televizori",
        "Dijagonala",
        "55\"",
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut db_path = String::from("./catalog_dev.db");

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog seed data generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./catalog_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Catalog seed data generator");
    println!("Database: {db_path}");
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, migrations applied");

    if !db.products().list(0, 1).await?.is_empty() {
        println!("⚠ Database already has products, skipping seed.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Publications must exist before products can link to them.
    let flyer: i64 =
        sqlx::query_scalar("INSERT INTO publications (name) VALUES (?1) RETURNING publication_id")
            .bind("Katalog kolovoz 2026")
            .fetch_one(db.pool())
            .await?;

    let products = db.products();
    let mut previous_id = 0;

    for (name, price, discount, brand, category, feature, value) in PRODUCTS {
        let input = ProductInput {
            name: name.to_string(),
            price: *price,
            discount: *discount,
            quantity: 10,
            description: format!("{name} - {feature}: {value}"),
            brand: brand.to_string(),
            category: category.to_string(),
            images: vec![ImageInput {
                url: format!(
                    "https://img.example/{}.jpg",
                    catalog_core::slug::slugify(name)
                ),
            }],
            features: vec![FeatureInput {
                feature_id: 0,
                name: feature.to_string(),
                value: value.to_string(),
                recommended: true,
            }],
            publications: vec![PublicationInput {
                publication_id: flyer,
            }],
            recommendations: if previous_id != 0 {
                vec![catalog_core::RecommendationInput {
                    product_id: previous_id,
                }]
            } else {
                Vec::new()
            },
            ..ProductInput::default()
        };

        let created = products.create(input).await?;
        println!("  + [{}] {}", created.product_id, created.name);
        previous_id = created.product_id;
    }

    // One product arrives as a raw JSON payload, the way the admin API
    // hands them over.
    let payload = json!({
        "name": "Čaša za vino, 6 kom",
        "price": 1490,
        "brand": "Bormioli",
        "category": "Kuhinja",
    });
    let created = products.create(ProductInput::from_value(payload)?).await?;
    println!("  + [{}] {}", created.product_id, created.name);

    println!();
    println!("Verifying the search index...");
    let hits = products.search("perilica", 0, 10).await?;
    println!("  search 'perilica': {} results", hits.len());
    let hits = products.search("casa", 0, 10).await?;
    println!("  search 'casa' (accent-folded): {} results", hits.len());

    let page = products.list(0, 10).await?;
    println!("  list: {} products", page.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
