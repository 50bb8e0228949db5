//! One-shot demo: bulk-insert five products into `sample_store.products`,
//! then read the collection back and print it.

use anyhow::{Context, Result};
use bson::doc;
use futures_util::TryStreamExt;

use rota_db::models::Product;
use rota_db::{DB_NAME, PRODUCTS_COLLECTION};

fn demo_products() -> Vec<Product> {
    let catalog: [(&str, f64, &str, i32, bool); 5] = [
        ("Laptop", 999.99, "Electronics", 5, true),
        ("Wireless Mouse", 29.99, "Electronics", 50, true),
        ("USB-C Cable", 12.99, "Accessories", 100, true),
        ("Monitor Stand", 45.50, "Furniture", 0, false),
        ("Mechanical Keyboard", 149.99, "Electronics", 12, true),
    ];

    catalog.into_iter()
        .map(|(name, price, category, quantity, in_stock)| Product {
            id: None,
            name: name.into(),
            price,
            category: category.into(),
            quantity,
            in_stock,
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let uri = std::env::var("MONGODB_URI").context("MONGODB_URI must be set")?;

    let client = rota_db::connect(&uri).await?;
    println!("Connected to MongoDB");

    let products = client
        .database(DB_NAME)
        .collection::<Product>(PRODUCTS_COLLECTION);

    let result = products.insert_many(demo_products()).await?;
    println!(
        "Inserted {} documents into {}.{}",
        result.inserted_ids.len(),
        DB_NAME,
        PRODUCTS_COLLECTION
    );

    let all: Vec<Product> = products.find(doc! {}).await?.try_collect().await?;
    for (idx, product) in all.iter().enumerate() {
        println!();
        println!("Product {}:", idx + 1);
        println!(
            "  id:       {}",
            product.id.map(|oid| oid.to_hex()).unwrap_or_default()
        );
        println!("  name:     {}", product.name);
        println!("  price:    ${:.2}", product.price);
        println!("  category: {}", product.category);
        println!("  quantity: {}", product.quantity);
        println!("  in stock: {}", product.in_stock);
    }

    println!();
    println!("Total products in collection: {}", all.len());

    Ok(())
}
