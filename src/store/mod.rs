//! The wedding state store.
//!
//! [`WeddingStore`] owns the six collections (settings, budget categories, guests,
//! tasks, gifts and the session id). Reads go straight to memory. Every mutation
//! changes memory synchronously, then hands a snapshot of the whole collection to the
//! persistence writer and returns a [`PendingWrite`] the caller may await or drop.
//!
//! Lifecycle: `new` (uninitialized) -> `load` (loading, then ready) -> `close`.
//! Mutations are refused until the first `load` has finished, so nothing built on the
//! compiled-in defaults can overwrite what storage already holds.

pub mod ids;
pub mod session;
pub mod writer;

pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use session::{AuthState, Route, auth_state, route_for};
pub use writer::{PendingWrite, PersistenceWriter};

use crate::{
    config::seed::SeedConfig,
    core::dashboard::{DashboardInput, DashboardSummary},
    errors::{Error, Result},
    models::{
        BudgetCategory, Collection, Gift, Guest, Record, SettingsPatch, Task, WeddingSettings,
    },
    storage::{KeyValueStorage, StorageKey},
};
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// A store shared across the consumers of one session.
pub type SharedStore<S> = Arc<RwLock<WeddingStore<S>>>;

/// Where the store is in its startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Created, `load` not called yet
    Uninitialized,
    /// Reading from storage
    Loading,
    /// Collections are authoritative
    Ready,
}

/// Every collection the store holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeddingData {
    /// Settings singleton
    pub settings: WeddingSettings,
    /// Budget categories
    pub budget_categories: Collection<BudgetCategory>,
    /// Guests
    pub guests: Collection<Guest>,
    /// Tasks
    pub tasks: Collection<Task>,
    /// Gifts
    pub gifts: Collection<Gift>,
    /// Session identifier
    pub session_id: Option<String>,
}

impl WeddingData {
    /// First-run data: empty settings, guests and gifts; seeded categories and tasks.
    #[must_use]
    pub fn from_seed(seed: &SeedConfig) -> Self {
        Self {
            budget_categories: seed.budget_records().into(),
            tasks: seed.task_records().into(),
            ..Self::default()
        }
    }
}

/// A record collection the store persists under its own key.
pub trait StoredCollection: Record {
    /// Storage key for the whole collection
    const KEY: StorageKey;

    /// This collection within the store's data.
    fn select(data: &WeddingData) -> &Collection<Self>;

    /// Mutable access to this collection.
    fn select_mut(data: &mut WeddingData) -> &mut Collection<Self>;
}

impl StoredCollection for BudgetCategory {
    const KEY: StorageKey = StorageKey::Budget;

    fn select(data: &WeddingData) -> &Collection<Self> {
        &data.budget_categories
    }

    fn select_mut(data: &mut WeddingData) -> &mut Collection<Self> {
        &mut data.budget_categories
    }
}

impl StoredCollection for Guest {
    const KEY: StorageKey = StorageKey::Guests;

    fn select(data: &WeddingData) -> &Collection<Self> {
        &data.guests
    }

    fn select_mut(data: &mut WeddingData) -> &mut Collection<Self> {
        &mut data.guests
    }
}

impl StoredCollection for Task {
    const KEY: StorageKey = StorageKey::Tasks;

    fn select(data: &WeddingData) -> &Collection<Self> {
        &data.tasks
    }

    fn select_mut(data: &mut WeddingData) -> &mut Collection<Self> {
        &mut data.tasks
    }
}

impl StoredCollection for Gift {
    const KEY: StorageKey = StorageKey::Gifts;

    fn select(data: &WeddingData) -> &Collection<Self> {
        &data.gifts
    }

    fn select_mut(data: &mut WeddingData) -> &mut Collection<Self> {
        &mut data.gifts
    }
}

/// What happened to each key during [`WeddingStore::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Keys whose stored value replaced the default
    pub loaded: Vec<StorageKey>,
    /// Keys never written; defaults kept
    pub missing: Vec<StorageKey>,
    /// Keys that could not be read or decoded; defaults kept
    pub failed: Vec<(StorageKey, Error)>,
}

impl LoadReport {
    /// True when no key failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn record<T>(&mut self, key: StorageKey, outcome: Result<Option<T>>) -> Option<T> {
        match outcome {
            Ok(Some(value)) => {
                self.loaded.push(key);
                Some(value)
            }
            Ok(None) => {
                self.missing.push(key);
                None
            }
            Err(e) => {
                warn!(%key, "Failed to load, keeping defaults: {}", e);
                self.failed.push((key, e));
                None
            }
        }
    }
}

async fn read_key<S, T>(storage: &S, key: StorageKey) -> Result<Option<T>>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    match storage.get(key.as_str()).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| Error::Decode {
                key: key.as_str().to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// In-memory wedding state with write-through persistence.
pub struct WeddingStore<S: KeyValueStorage> {
    storage: Arc<S>,
    writer: PersistenceWriter,
    ids: Box<dyn IdGenerator>,
    defaults: WeddingData,
    data: WeddingData,
    phase: LoadPhase,
}

impl<S: KeyValueStorage> WeddingStore<S> {
    /// Creates an uninitialized store holding `defaults` until [`load`](Self::load)
    /// runs. Ids are random UUIDs.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime (the persistence writer is spawned here).
    pub fn new(storage: S, defaults: WeddingData) -> Self {
        let storage = Arc::new(storage);
        let writer = PersistenceWriter::spawn(Arc::clone(&storage));
        Self {
            storage,
            writer,
            ids: Box::new(UuidGenerator),
            data: defaults.clone(),
            defaults,
            phase: LoadPhase::Uninitialized,
        }
    }

    /// Replaces the id generator.
    #[must_use]
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Loads all six keys from storage in parallel.
    ///
    /// Each key that is present and decodes replaces its default; a missing key keeps
    /// the default; a key that fails to read or decode is logged, keeps the default as
    /// a whole, and is listed in the returned report.
    ///
    /// Writes already queued by this store are drained first, so reloading a live store
    /// reads back its own latest snapshots.
    pub async fn load(&mut self) -> LoadReport {
        if let Err(e) = self.writer.flush().await {
            warn!("Failed to drain pending writes before load: {}", e);
        }
        self.phase = LoadPhase::Loading;
        info!("Loading wedding data from storage");

        let storage = self.storage.as_ref();
        let (settings, budget, guests, tasks, gifts, session_id) = tokio::join!(
            read_key::<S, WeddingSettings>(storage, StorageKey::Settings),
            read_key::<S, Collection<BudgetCategory>>(storage, StorageKey::Budget),
            read_key::<S, Collection<Guest>>(storage, StorageKey::Guests),
            read_key::<S, Collection<Task>>(storage, StorageKey::Tasks),
            read_key::<S, Collection<Gift>>(storage, StorageKey::Gifts),
            read_key::<S, Option<String>>(storage, StorageKey::SessionId),
        );

        let mut report = LoadReport::default();
        let mut data = self.defaults.clone();
        if let Some(v) = report.record(StorageKey::Settings, settings) {
            data.settings = v;
        }
        if let Some(v) = report.record(StorageKey::Budget, budget) {
            data.budget_categories = v;
        }
        if let Some(v) = report.record(StorageKey::Guests, guests) {
            data.guests = v;
        }
        if let Some(v) = report.record(StorageKey::Tasks, tasks) {
            data.tasks = v;
        }
        if let Some(v) = report.record(StorageKey::Gifts, gifts) {
            data.gifts = v;
        }
        if let Some(v) = report.record(StorageKey::SessionId, session_id) {
            data.session_id = v;
        }

        self.data = data;
        self.phase = LoadPhase::Ready;
        info!(
            loaded = report.loaded.len(),
            missing = report.missing.len(),
            failed = report.failed.len(),
            "Wedding data ready"
        );
        report
    }

    /// Current startup phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True until `load` has finished.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase != LoadPhase::Ready
    }

    /// All collections.
    #[must_use]
    pub const fn data(&self) -> &WeddingData {
        &self.data
    }

    /// Settings singleton.
    #[must_use]
    pub const fn settings(&self) -> &WeddingSettings {
        &self.data.settings
    }

    /// Budget categories in insertion order.
    #[must_use]
    pub fn budget_categories(&self) -> &[BudgetCategory] {
        self.data.budget_categories.as_slice()
    }

    /// Guests in insertion order.
    #[must_use]
    pub fn guests(&self) -> &[Guest] {
        self.data.guests.as_slice()
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.data.tasks.as_slice()
    }

    /// Gifts in insertion order.
    #[must_use]
    pub fn gifts(&self) -> &[Gift] {
        self.data.gifts.as_slice()
    }

    /// Records of collection `R`.
    #[must_use]
    pub fn records<R: StoredCollection>(&self) -> &[R] {
        R::select(&self.data).as_slice()
    }

    /// Looks up one record by id.
    #[must_use]
    pub fn get<R: StoredCollection>(&self, id: &str) -> Option<&R> {
        R::select(&self.data).get(id)
    }

    /// Current session identifier.
    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.data.session_id.as_deref()
    }

    /// Both partner names are set.
    #[must_use]
    pub fn is_setup(&self) -> bool {
        self.data.settings.is_setup()
    }

    /// Whether a session identifier is present.
    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        auth_state(self.session_id())
    }

    /// Where the app should route given the load phase and session.
    #[must_use]
    pub fn route(&self) -> Route {
        route_for(self.phase, self.session_id())
    }

    /// Home screen summary at instant `now`.
    #[must_use]
    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardSummary {
        DashboardSummary::compute(
            DashboardInput {
                settings: &self.data.settings,
                budget_categories: self.budget_categories(),
                guests: self.guests(),
                tasks: self.tasks(),
                gifts: self.gifts(),
            },
            now,
        )
    }

    /// Appends a new record with a freshly generated id.
    ///
    /// Returns the id and the pending write of the updated collection. Before `load`
    /// has finished nothing is added, the id is empty and the write fails with
    /// [`Error::NotReady`].
    pub fn add<R: StoredCollection>(&mut self, draft: R::Draft) -> (String, PendingWrite) {
        if let Some(refused) = self.refuse_unless_ready(R::KEY) {
            return (String::new(), refused);
        }
        let id = self.ids.next_id();
        R::select_mut(&mut self.data).push(R::from_draft(id.clone(), draft));
        debug!(key = %R::KEY, id = %id, "Added record");
        (id, self.persist_collection::<R>())
    }

    /// Shallow-merges `patch` onto the record with `id`, keeping its position.
    ///
    /// An unknown id changes nothing; the unchanged collection is still persisted.
    pub fn update<R: StoredCollection>(&mut self, id: &str, patch: R::Patch) -> PendingWrite {
        if let Some(refused) = self.refuse_unless_ready(R::KEY) {
            return refused;
        }
        if R::select_mut(&mut self.data).update(id, patch) {
            debug!(key = %R::KEY, id, "Updated record");
        } else {
            debug!(key = %R::KEY, id, "No record to update");
        }
        self.persist_collection::<R>()
    }

    /// Removes the record with `id` if present.
    pub fn delete<R: StoredCollection>(&mut self, id: &str) -> PendingWrite {
        if let Some(refused) = self.refuse_unless_ready(R::KEY) {
            return refused;
        }
        if R::select_mut(&mut self.data).remove(id) {
            debug!(key = %R::KEY, id, "Deleted record");
        } else {
            debug!(key = %R::KEY, id, "No record to delete");
        }
        self.persist_collection::<R>()
    }

    /// Shallow-merges `patch` onto the settings.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> PendingWrite {
        if let Some(refused) = self.refuse_unless_ready(StorageKey::Settings) {
            return refused;
        }
        self.data.settings.apply(patch);
        debug!("Updated settings");
        self.persist(StorageKey::Settings, &self.data.settings)
    }

    /// Replaces the session identifier. `None` signs out; no other collection changes.
    pub fn set_session_id(&mut self, session_id: Option<String>) -> PendingWrite {
        if let Some(refused) = self.refuse_unless_ready(StorageKey::SessionId) {
            return refused;
        }
        self.data.session_id = session_id;
        info!(signed_in = self.data.session_id.is_some(), "Session changed");
        self.persist(StorageKey::SessionId, &self.data.session_id)
    }

    /// Waits until every write issued so far has reached storage.
    pub async fn flush(&self) -> Result<()> {
        self.writer.flush().await
    }

    /// Drains pending writes and stops the persistence writer.
    pub async fn close(self) -> Result<()> {
        info!("Closing wedding store");
        self.writer.shutdown().await
    }

    /// Wraps the store for sharing between consumers.
    #[must_use]
    pub fn into_shared(self) -> SharedStore<S> {
        Arc::new(RwLock::new(self))
    }

    /// Closes a shared store.
    ///
    /// The last handle drains and stops the writer like [`close`](Self::close). While
    /// other handles remain, pending writes are flushed and the writer keeps running
    /// for them.
    pub async fn close_shared(shared: SharedStore<S>) -> Result<()> {
        match Arc::try_unwrap(shared) {
            Ok(lock) => lock.into_inner().close().await,
            Err(shared) => {
                debug!("Store still shared, flushing instead of closing");
                shared.read().await.flush().await
            }
        }
    }

    fn refuse_unless_ready(&self, key: StorageKey) -> Option<PendingWrite> {
        if self.phase == LoadPhase::Ready {
            return None;
        }
        warn!(%key, phase = ?self.phase, "Mutation before load finished, ignoring");
        Some(PendingWrite::failed(
            key,
            Error::NotReady {
                key: key.as_str().to_string(),
            },
        ))
    }

    fn persist_collection<R: StoredCollection>(&self) -> PendingWrite {
        self.persist(R::KEY, R::select(&self.data))
    }

    fn persist<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> PendingWrite {
        match serde_json::to_string(value) {
            Ok(payload) => self.writer.enqueue(key, payload),
            Err(e) => {
                warn!(%key, "Failed to serialize snapshot: {}", e);
                PendingWrite::failed(key, e.into())
            }
        }
    }
}
