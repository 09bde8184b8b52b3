//! Insertion-ordered record collections.
//!
//! A [`Collection`] is the in-memory form of one persisted JSON array. Records keep the
//! order they were inserted in, and lookups go by the string id every record carries.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A record that lives in an id-keyed collection.
///
/// `Draft` is the record minus its id (what a form produces) and `Patch` is a partial
/// update where `None` fields leave the existing value alone.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Fields supplied when creating a record
    type Draft;
    /// Partial update applied by shallow merge
    type Patch;

    /// Identifier of this record, unique within its collection
    fn id(&self) -> &str;

    /// Builds a record from a freshly generated id and the supplied fields.
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Shallow-merges a patch onto this record. The id is never touched.
    fn apply(&mut self, patch: Self::Patch);
}

/// Ordered list of records of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> From<Vec<R>> for Collection<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Record> Collection<R> {
    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Finds a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// True if a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends a record at the end.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Applies a patch to the record with `id`, keeping its position.
    ///
    /// Returns `false` and leaves the collection untouched when no record matches.
    pub fn update(&mut self, id: &str, patch: R::Patch) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`. Returns `false` when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }
}

impl<'a, R: Record> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
