//! One-shot demo against the Atlas sample data: list databases, list the
//! collections of `sample_mflix`, and print its first five movies as JSON.

use anyhow::{Context, Result};
use bson::{Document, doc};
use futures_util::TryStreamExt;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let uri = std::env::var("MONGODB_URI").context("MONGODB_URI must be set")?;

    let client = rota_db::connect(&uri).await?;
    println!("Connected to MongoDB");

    println!();
    println!("Databases:");
    for name in client.list_database_names().await? {
        println!("  - {name}");
    }

    let mflix = client.database("sample_mflix");

    println!();
    println!("Collections in sample_mflix:");
    for name in mflix.list_collection_names().await? {
        println!("  - {name}");
    }

    let movies = mflix.collection::<Document>("movies");
    let sample: Vec<Document> = movies.find(doc! {}).limit(5).await?.try_collect().await?;

    println!();
    println!("First {} documents from sample_mflix.movies:", sample.len());
    for (idx, movie) in sample.iter().enumerate() {
        println!();
        println!("Document {}:", idx + 1);
        println!("{}", serde_json::to_string_pretty(movie)?);
    }

    Ok(())
}
