use bson::{doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::error::Error;

use crate::Store;
use crate::models::RotaEntry;

impl Store {
    /// All rota entries, most recent assignment date first. Unbounded.
    pub async fn list_entries(&self) -> Result<Vec<RotaEntry>, Error> {
        let cursor = self
            .entries()
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await?;
        cursor.try_collect().await
    }

    /// Persist a new entry and hand it back with the assigned id.
    pub async fn insert_entry(&self, mut entry: RotaEntry) -> Result<RotaEntry, Error> {
        let result = self.entries().insert_one(&entry).await?;
        entry.id = result.inserted_id.as_object_id();
        Ok(entry)
    }

    /// Remove the entry with the given id. Returns false when nothing matched.
    pub async fn delete_entry(&self, id: ObjectId) -> Result<bool, Error> {
        let result = self.entries().delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
