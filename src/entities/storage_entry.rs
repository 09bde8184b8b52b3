//! Storage entry entity - one row per persisted key.
//!
//! The store keeps each collection as a complete JSON document under a fixed key, so
//! the table is a plain key-value map with a modification timestamp.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Key-value row holding one serialized collection
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage_entries")]
pub struct Model {
    /// Storage key (e.g., `"@everafter_guests"`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    /// Serialized JSON value
    pub value: String,
    /// When this key was last written
    pub updated_at: DateTime,
}

/// `StorageEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
