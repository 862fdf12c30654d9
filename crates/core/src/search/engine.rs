//! End-to-end query pipeline.
//!
//! ```text
//! QueryIntent → plan → StreamStore::find → PrefixSet filter → shape → QueryResult
//! ```
//!
//! The access filter runs on every matched document before shaping, for all
//! four intents, so distinct value lists only contain values of visible
//! streams.

use super::plan::plan;
use super::types::QueryResult;
use crate::access::PrefixSet;
use crate::document::PublicDocument;
use crate::filter_types::ResultShape;
use crate::query::QueryIntent;
use crate::storage::{StoreError, StreamStore};
use std::collections::{BTreeSet, HashMap};

/// Run one query against the store on behalf of a caller.
///
/// [`QueryIntent::Unsupported`] returns an empty result without touching the store.
pub fn execute(
    store: &dyn StreamStore,
    intent: &QueryIntent,
    access: &PrefixSet,
) -> Result<QueryResult, StoreError> {
    let plan = match plan(intent) {
        Some(plan) => plan,
        None => return Ok(QueryResult::empty()),
    };

    let matched = store.find(&plan.predicate)?;
    let total = matched.len();
    let visible = matched.iter().filter(|doc| access.permits_document(doc));

    let result = match plan.shape {
        ResultShape::DistinctSources => {
            let sources: BTreeSet<&str> = visible.filter_map(|doc| doc.source_name()).collect();
            QueryResult::Values(sources.into_iter().map(str::to_string).collect())
        }
        ResultShape::DistinctPaths => {
            let paths: BTreeSet<&str> = visible.filter_map(|doc| doc.path()).collect();
            QueryResult::Values(paths.into_iter().map(str::to_string).collect())
        }
        ResultShape::Documents => {
            QueryResult::Documents(dedup_public(visible.map(|doc| doc.public_projection())))
        }
    };

    tracing::debug!(
        intent = intent.kind(),
        matched = total,
        returned = result.len(),
        unrestricted = access.is_unrestricted(),
        "Query executed"
    );
    Ok(result)
}

/// Keep the first occurrence of each distinct public document.
///
/// Documents are bucketed by `(Path, uuid)` and compared by value only within
/// a bucket.
fn dedup_public(docs: impl Iterator<Item = PublicDocument>) -> Vec<PublicDocument> {
    let mut unique: Vec<PublicDocument> = Vec::new();
    let mut buckets: HashMap<(Option<String>, Option<String>), Vec<usize>> = HashMap::new();
    for doc in docs {
        let key = (doc.path().map(str::to_string), doc.uuid().map(str::to_string));
        let bucket = buckets.entry(key).or_default();
        if bucket.iter().any(|&i| unique[i] == doc) {
            continue;
        }
        bucket.push(unique.len());
        unique.push(doc);
    }
    unique
}
