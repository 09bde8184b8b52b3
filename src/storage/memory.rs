//! In-memory storage.
//!
//! Clones share the same map, so a test can hand one clone to the store and inspect
//! what was persisted through another. Reads and writes can be switched to fail to
//! exercise the store's error paths.

use super::KeyValueStorage;
use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// [`KeyValueStorage`] kept in a shared `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw values.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Makes every subsequent read fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw value currently stored under `key`.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::Storage {
                key: key.to_string(),
                message: "read failure injected".to_string(),
            });
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Storage {
                key: key.to_string(),
                message: "write failure injected".to_string(),
            });
        }
        self.entries.write().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_entries() -> Result<()> {
        let storage = MemoryStorage::new();
        let observer = storage.clone();

        storage.set("k", "v".to_string()).await?;

        assert_eq!(observer.get("k").await?, Some("v".to_string()));
        assert_eq!(observer.write_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_injected_failures() -> Result<()> {
        let storage = MemoryStorage::with_entries([("k", "v")]);

        storage.set_fail_reads(true);
        assert!(matches!(
            storage.get("k").await,
            Err(Error::Storage { .. })
        ));

        storage.set_fail_writes(true);
        assert!(storage.set("k", "w".to_string()).await.is_err());

        storage.set_fail_reads(false);
        assert_eq!(storage.get("k").await?, Some("v".to_string()));
        assert_eq!(storage.write_count(), 0);
        Ok(())
    }
}
