//! Loading stream snapshots from disk.
//!
//! A snapshot is a JSON array of stream documents as exported from the
//! ingestion store. Every element must be a JSON object.

use super::StoreError;
use crate::document::StoredDocument;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and validate every document in a JSON snapshot file.
pub fn load_documents(path: &Path) -> Result<Vec<StoredDocument>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values: Vec<Value> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            StoredDocument::from_value(value)
                .map_err(|reason| StoreError::InvalidDocument { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let without_path = documents.iter().filter(|d| d.path().is_none()).count();
    if without_path > 0 {
        tracing::warn!(
            "Snapshot {:?}: {} documents have no Path and are only visible to unrestricted callers",
            path,
            without_path
        );
    }
    tracing::info!("Loaded {} stream documents from {:?}", documents.len(), path);

    Ok(documents)
}
