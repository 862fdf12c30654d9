//! Query result types and their JSON rendering.

use crate::document::PublicDocument;
use serde::Serialize;

/// The outcome of one query, ready to serialize.
///
/// Renders as a JSON array: of strings for the two `distinct` intents, of
/// objects for the two `select *` intents. An empty result always renders
/// as `[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResult {
    /// Distinct scalar values, sorted ascending.
    Values(Vec<String>),
    /// Public projections, unique by content, in store order.
    Documents(Vec<PublicDocument>),
}

impl QueryResult {
    /// Result of an unsupported query.
    pub fn empty() -> Self {
        QueryResult::Values(Vec::new())
    }

    pub fn len(&self) -> usize {
        match self {
            QueryResult::Values(v) => v.len(),
            QueryResult::Documents(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to the response body.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
