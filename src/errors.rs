//! Unified error types for the wedding state store.
//!
//! Every fallible operation in the crate returns [`Result`]. The store itself never
//! treats an error as fatal: load failures fall back to defaults and write failures are
//! delivered on pending-write handles, but the error values are still typed so callers
//! and tests can inspect them.

use thiserror::Error;

/// Errors raised by configuration, storage and persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// The SQLite backend reported an error
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A storage backend failed to read or write a key
    #[error("Storage error for key '{key}': {message}")]
    Storage {
        /// Storage key involved in the failed operation
        key: String,
        /// Backend-specific description
        message: String,
    },

    /// A stored value exists but is not valid JSON for its collection
    #[error("Failed to decode value stored under '{key}': {source}")]
    Decode {
        /// Storage key holding the malformed value
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory collection could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The background persistence writer is no longer running
    #[error("Persistence writer has shut down")]
    WriterClosed,

    /// A mutation was attempted before the store finished loading
    #[error("Store is not loaded yet; refusing to write '{key}'")]
    NotReady {
        /// Storage key the mutation targeted
        key: String,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
