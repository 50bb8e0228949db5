pub mod models;
mod queries;

use bson::doc;
use mongodb::{Client, Collection, error::Error};
use tracing::info;

use crate::models::RotaEntry;

/// Database that holds the live rota collection and the demo product data.
pub const DB_NAME: &str = "sample_store";
pub const ROTA_COLLECTION: &str = "rota";
pub const PRODUCTS_COLLECTION: &str = "products";

/// Build a client and verify the deployment is actually reachable.
///
/// The driver connects lazily, so a bad URI would otherwise surface on the
/// first real operation instead of at startup.
pub async fn connect(uri: &str) -> Result<Client, Error> {
    let client = Client::with_uri_str(uri).await?;
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB");
    Ok(client)
}

/// Handle on the rota collection. One per process, shared by reference.
pub struct Store {
    entries: Collection<RotaEntry>,
}

impl Store {
    /// Connect and ping, then bind the rota collection.
    pub async fn connect(uri: &str) -> Result<Self, Error> {
        let client = connect(uri).await?;
        Ok(Self::with_client(&client))
    }

    /// Bind the rota collection on an existing client. Performs no I/O.
    pub fn with_client(client: &Client) -> Self {
        Self {
            entries: client.database(DB_NAME).collection(ROTA_COLLECTION),
        }
    }

    pub(crate) fn entries(&self) -> &Collection<RotaEntry> {
        &self.entries
    }
}
