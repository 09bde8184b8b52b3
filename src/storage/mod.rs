//! Persistent key-value storage behind the store.
//!
//! The store only needs two async operations: read a key and overwrite a key. There is
//! no transactionality across keys. [`KeyValueStorage`] is the seam; the SQLite backend
//! ([`SeaOrmStorage`]) is what the app runs on and [`MemoryStorage`] backs tests and
//! throwaway sessions.

pub mod database;
pub mod memory;

pub use database::SeaOrmStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;
use std::fmt;
use std::future::Future;

/// Async key-value storage holding one JSON document per key.
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Reads the value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>> + Send;
}

/// The six keys the store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Settings singleton
    Settings,
    /// Budget categories
    Budget,
    /// Guest list
    Guests,
    /// Tasks
    Tasks,
    /// Gifts
    Gifts,
    /// Session identifier
    SessionId,
}

impl StorageKey {
    /// Every key, in load order.
    pub const ALL: [Self; 6] = [
        Self::Settings,
        Self::Budget,
        Self::Guests,
        Self::Tasks,
        Self::Gifts,
        Self::SessionId,
    ];

    /// Key string used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "@everafter_settings",
            Self::Budget => "@everafter_budget",
            Self::Guests => "@everafter_guests",
            Self::Tasks => "@everafter_tasks",
            Self::Gifts => "@everafter_gifts",
            Self::SessionId => "@everafter_wedding_id",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
