//! Storage layer: the stream store abstraction and its in-memory backend.
//!
//! The service only reads streams. Records are created by an external
//! ingestion system; the in-memory backend is seeded from a JSON snapshot of
//! that system's documents at startup.

/// In-memory stream store.
pub mod memory;
/// JSON snapshot loading.
pub mod persistence;

pub use memory::MemoryStore;
pub use persistence::load_documents;

use crate::document::StoredDocument;
use crate::filter_types::StorePredicate;
use std::path::PathBuf;
use std::sync::Arc;

/// Errors raised by a stream store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read stream snapshot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stream snapshot '{path}' is not a JSON array of documents: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("stream document {index}: {reason}")]
    InvalidDocument { index: usize, reason: String },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to stream documents.
///
/// Implementations provide their own internal synchronization; callers share
/// one handle across all requests and never hold locks across calls.
pub trait StreamStore: Send + Sync {
    /// All documents satisfying `predicate`, in store order.
    fn find(&self, predicate: &StorePredicate) -> Result<Vec<Arc<StoredDocument>>, StoreError>;

    /// Number of documents held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
