//! SQLite-backed storage using `SeaORM`.
//!
//! Each key maps to one row of the `storage_entries` table. Writes are upserts so the
//! first write of a key inserts and every later write overwrites in place.

use super::KeyValueStorage;
use crate::{
    entities::{StorageEntry, storage_entry},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};
use tracing::trace;

/// [`KeyValueStorage`] over a `SeaORM` connection.
#[derive(Debug, Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Wraps an open connection. Tables must already exist
    /// (see [`crate::config::database::create_tables`]).
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl KeyValueStorage for SeaOrmStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = StorageEntry::find_by_id(key.to_string())
            .one(&self.db)
            .await?;
        trace!(key, found = entry.is_some(), "Read storage entry");
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let entry = storage_entry::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().naive_utc()),
        };

        StorageEntry::insert(entry)
            .on_conflict(
                OnConflict::column(storage_entry::Column::Key)
                    .update_columns([
                        storage_entry::Column::Value,
                        storage_entry::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        trace!(key, "Wrote storage entry");
        Ok(())
    }
}
