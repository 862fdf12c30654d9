//! In-memory stream store.
//!
//! [`MemoryStore`] keeps documents behind a `parking_lot::RwLock`. Lookups take
//! a read lock for the duration of one scan and hand back shared `Arc`s, so
//! concurrent queries never block each other.

use super::persistence::load_documents;
use super::{StoreError, StreamStore};
use crate::document::StoredDocument;
use crate::filter_types::StorePredicate;
use crate::search::filter::matches_predicate;
use parking_lot::RwLock;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// A thread-safe, in-memory collection of stream documents.
///
/// Cloning produces a new handle to the same shared data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<Vec<Arc<StoredDocument>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from a JSON snapshot file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self::new();
        store.extend(load_documents(path.as_ref())?);
        Ok(store)
    }

    /// Adds a document, assigning a fresh storage id if it has none.
    /// Returns the document's storage id.
    pub fn insert(&self, mut doc: StoredDocument) -> Value {
        let id = match doc.storage_id() {
            Some(id) => id.clone(),
            None => {
                let id = Value::String(Uuid::new_v4().to_string());
                doc.set_storage_id(id.clone());
                id
            }
        };
        self.documents.write().push(Arc::new(doc));
        id
    }

    /// Adds many documents under a single write lock.
    pub fn extend<I: IntoIterator<Item = StoredDocument>>(&self, docs: I) {
        let mut documents = self.documents.write();
        for mut doc in docs {
            if doc.storage_id().is_none() {
                doc.set_storage_id(Value::String(Uuid::new_v4().to_string()));
            }
            documents.push(Arc::new(doc));
        }
    }
}

impl StreamStore for MemoryStore {
    fn find(&self, predicate: &StorePredicate) -> Result<Vec<Arc<StoredDocument>>, StoreError> {
        let documents = self.documents.read();
        Ok(documents
            .iter()
            .filter(|doc| matches_predicate(doc, predicate))
            .cloned()
            .collect())
    }

    fn len(&self) -> usize {
        self.documents.read().len()
    }
}
