//! Shared test utilities for `EverAfter`.
//!
//! This module provides common helper functions for setting up test databases and
//! stores, and for building records with sensible defaults.

use crate::{
    config::seed::SeedConfig,
    errors::Result,
    models::{Gift, Guest, NewBudgetCategory, NewGift, NewGuest, NewTask, RsvpStatus, Side},
    storage::MemoryStorage,
    store::{SequentialIds, WeddingData, WeddingStore},
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an unloaded store over `storage` with the built-in seed data and
/// deterministic ids (`id-1`, `id-2`, ...).
pub fn store_over(storage: MemoryStorage) -> WeddingStore<MemoryStorage> {
    WeddingStore::new(storage, WeddingData::from_seed(&SeedConfig::default()))
        .with_id_generator(SequentialIds::with_prefix("id-"))
}

/// Creates a loaded store over fresh in-memory storage.
/// Returns (store, storage) so tests can inspect what was persisted.
pub async fn setup_memory_store() -> (WeddingStore<MemoryStorage>, MemoryStorage) {
    init_test_tracing();
    let storage = MemoryStorage::new();
    let mut store = store_over(storage.clone());
    store.load().await;
    (store, storage)
}

/// New guest with the given name, pending, mutual side, no plus-one.
pub fn new_guest(name: &str) -> NewGuest {
    NewGuest {
        name: name.to_string(),
        rsvp_status: RsvpStatus::Pending,
        side: Side::Mutual,
        plus_one: false,
        ..NewGuest::default()
    }
}

/// Guest record with a fixed id and RSVP status.
pub fn guest_with_status(id: &str, name: &str, status: RsvpStatus) -> Guest {
    Guest {
        id: id.to_string(),
        name: name.to_string(),
        rsvp_status: status,
        ..Guest::default()
    }
}

/// New open task in the "Planning" category.
pub fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        category: "Planning".to_string(),
        ..NewTask::default()
    }
}

/// New budget category with the `default` icon.
pub fn new_category(name: &str, allocated: f64, spent: f64) -> NewBudgetCategory {
    NewBudgetCategory {
        name: name.to_string(),
        allocated,
        spent,
        ..NewBudgetCategory::default()
    }
}

/// New gift from "Aunt May", no thank-you sent.
pub fn new_gift(description: &str) -> NewGift {
    NewGift {
        guest_name: "Aunt May".to_string(),
        description: description.to_string(),
        estimated_value: "50".to_string(),
        thank_you_sent: false,
        date_received: "2027-05-01".to_string(),
    }
}

/// Gift record with a fixed id.
pub fn sample_gift(id: &str, description: &str) -> Gift {
    Gift {
        id: id.to_string(),
        guest_name: "Aunt May".to_string(),
        description: description.to_string(),
        estimated_value: "50".to_string(),
        thank_you_sent: false,
        date_received: "2027-05-01".to_string(),
    }
}
