//! Document types as they live in MongoDB. Distinct from the rota-types API
//! models so the wire format can evolve without touching stored data.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use rota_types::api::RotaEntryResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotaEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub duties: Vec<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl RotaEntry {
    /// Convert to the wire shape, rendering the ObjectId as its hex form.
    pub fn into_api(self) -> RotaEntryResponse {
        let id = match self.id {
            Some(oid) => oid.to_hex(),
            None => {
                warn!("Rota entry '{}' has no _id", self.name);
                String::new()
            }
        };

        RotaEntryResponse {
            id,
            name: self.name,
            duties: self.duties,
            date: self.date,
            created_at: self.created_at,
        }
    }
}

/// Demo document inserted by the `seed-products` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub quantity: i32,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}
