//! Background persistence writer.
//!
//! Mutations hand complete collection snapshots to a single task over an `mpsc`
//! channel. The task applies them one at a time in the order they were enqueued, so a
//! slow write can never land after, and overwrite, a newer snapshot of the same key.
//!
//! Every write answers on a `oneshot` channel. Callers that want the outcome await the
//! returned [`PendingWrite`]; callers that don't simply drop it.

use crate::{
    errors::{Error, Result},
    storage::{KeyValueStorage, StorageKey},
};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, trace};

/// Messages processed by the writer task.
enum WriterMessage {
    /// Overwrite `key` with `payload`.
    Write {
        key: StorageKey,
        payload: String,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Reply once every earlier message has been processed.
    Flush { reply: oneshot::Sender<()> },
}

/// Outcome of one enqueued write.
#[derive(Debug)]
pub struct PendingWrite {
    key: StorageKey,
    reply: oneshot::Receiver<Result<()>>,
}

impl PendingWrite {
    /// Key this write targets.
    #[must_use]
    pub const fn key(&self) -> StorageKey {
        self.key
    }

    /// Waits for the write to be applied and returns its outcome.
    pub async fn wait(self) -> Result<()> {
        self.reply.await.unwrap_or_else(|_| Err(Error::WriterClosed))
    }

    /// A write that failed before it could be enqueued.
    pub(crate) fn failed(key: StorageKey, error: Error) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Err(error));
        Self { key, reply: rx }
    }
}

/// Handle to the writer task.
#[derive(Debug)]
pub struct PersistenceWriter {
    tx: mpsc::UnboundedSender<WriterMessage>,
    task: JoinHandle<()>,
}

impl PersistenceWriter {
    /// Starts the writer task on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<S: KeyValueStorage>(storage: Arc<S>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_writer(storage, rx));
        Self { tx, task }
    }

    /// Queues `payload` to be written under `key`.
    pub fn enqueue(&self, key: StorageKey, payload: String) -> PendingWrite {
        let (reply, rx) = oneshot::channel();
        match self.tx.send(WriterMessage::Write {
            key,
            payload,
            reply,
        }) {
            Ok(()) => PendingWrite { key, reply: rx },
            Err(_) => {
                error!(%key, "Persistence writer is gone, dropping write");
                PendingWrite::failed(key, Error::WriterClosed)
            }
        }
    }

    /// Waits until every write queued so far has been applied.
    pub async fn flush(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(WriterMessage::Flush { reply })
            .map_err(|_| Error::WriterClosed)?;
        rx.await.map_err(|_| Error::WriterClosed)
    }

    /// Drains the queue and stops the task.
    pub async fn shutdown(self) -> Result<()> {
        let Self { tx, task } = self;
        drop(tx);
        task.await.map_err(|e| {
            error!("Persistence writer task failed: {}", e);
            Error::WriterClosed
        })
    }
}

async fn run_writer<S: KeyValueStorage>(
    storage: Arc<S>,
    mut rx: mpsc::UnboundedReceiver<WriterMessage>,
) {
    debug!("Persistence writer started");
    while let Some(message) = rx.recv().await {
        match message {
            WriterMessage::Write {
                key,
                payload,
                reply,
            } => {
                trace!(%key, bytes = payload.len(), "Persisting snapshot");
                let outcome = storage.set(key.as_str(), payload).await;
                if let Err(e) = &outcome {
                    error!(%key, "Failed to persist: {}", e);
                }
                // Nobody listening is the normal fire-and-forget case.
                let _ = reply.send(outcome);
            }
            WriterMessage::Flush { reply } => {
                let _ = reply.send(());
            }
        }
    }
    debug!("Persistence writer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::test_utils::init_test_tracing;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Storage whose first write is slower than every later one.
    struct SlowFirstWrite {
        inner: MemoryStorage,
        calls: AtomicUsize,
    }

    impl KeyValueStorage for SlowFirstWrite {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> Result<()> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            self.inner.set(key, value).await
        }
    }

    #[tokio::test]
    async fn test_writes_apply_in_enqueue_order() -> Result<()> {
        init_test_tracing();
        let memory = MemoryStorage::new();
        let writer = PersistenceWriter::spawn(Arc::new(SlowFirstWrite {
            inner: memory.clone(),
            calls: AtomicUsize::new(0),
        }));

        let _ = writer.enqueue(StorageKey::Guests, "[\"old\"]".to_string());
        let _ = writer.enqueue(StorageKey::Guests, "[\"new\"]".to_string());
        writer.flush().await?;

        assert_eq!(
            memory.raw(StorageKey::Guests.as_str()).await,
            Some("[\"new\"]".to_string())
        );
        assert_eq!(memory.write_count(), 2);
        writer.shutdown().await
    }

    #[tokio::test]
    async fn test_pending_write_reports_success() -> Result<()> {
        let memory = MemoryStorage::new();
        let writer = PersistenceWriter::spawn(Arc::new(memory.clone()));

        let pending = writer.enqueue(StorageKey::Tasks, "[]".to_string());
        assert_eq!(pending.key(), StorageKey::Tasks);
        pending.wait().await?;

        assert_eq!(memory.raw("@everafter_tasks").await, Some("[]".to_string()));
        writer.shutdown().await
    }

    #[tokio::test]
    async fn test_pending_write_reports_failure() -> Result<()> {
        init_test_tracing();
        let memory = MemoryStorage::new();
        memory.set_fail_writes(true);
        let writer = PersistenceWriter::spawn(Arc::new(memory.clone()));

        let result = writer
            .enqueue(StorageKey::Gifts, "[]".to_string())
            .wait()
            .await;

        assert!(matches!(result, Err(Error::Storage { .. })));
        assert_eq!(memory.raw("@everafter_gifts").await, None);
        writer.shutdown().await
    }

    #[tokio::test]
    async fn test_shutdown_drains_queue() -> Result<()> {
        let memory = MemoryStorage::new();
        let writer = PersistenceWriter::spawn(Arc::new(memory.clone()));

        let _ = writer.enqueue(StorageKey::Settings, "{}".to_string());
        writer.shutdown().await?;

        assert_eq!(memory.raw("@everafter_settings").await, Some("{}".to_string()));
        Ok(())
    }
}
