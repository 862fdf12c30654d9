//! Store predicate types.
//!
//! Defines the predicate and result-shape structure that the query planner
//! produces and the storage layer evaluates.

/// A predicate against stream documents in the store.
///
/// All string comparisons are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorePredicate {
    /// Every document.
    MatchAll,
    /// `Metadata.SourceName == source`
    SourceIs { source: String },
    /// `Metadata.SourceName == source AND Path == path`
    SourceAndPath { source: String, path: String },
    /// `uuid == u1 OR uuid == u2 OR ...`. An empty list matches nothing.
    UuidIn { uuids: Vec<String> },
}

/// How matched documents are turned into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// Distinct `Metadata.SourceName` values.
    DistinctSources,
    /// Distinct `Path` values.
    DistinctPaths,
    /// Full documents, deduplicated on their public projection.
    Documents,
}

/// A store lookup plus the shape of its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub predicate: StorePredicate,
    pub shape: ResultShape,
}
