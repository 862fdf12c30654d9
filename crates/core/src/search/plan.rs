//! Translation of query intents into store lookups.

use crate::filter_types::{QueryPlan, ResultShape, StorePredicate};
use crate::query::QueryIntent;

/// Build the store predicate and result shape for an intent.
///
/// Returns `None` for [`QueryIntent::Unsupported`], which never reaches the store.
pub fn plan(intent: &QueryIntent) -> Option<QueryPlan> {
    let (predicate, shape) = match intent {
        QueryIntent::ListSources => (StorePredicate::MatchAll, ResultShape::DistinctSources),
        QueryIntent::ListPathsForSource { source } => (
            StorePredicate::SourceIs { source: source.clone() },
            ResultShape::DistinctPaths,
        ),
        QueryIntent::GetStreamsBySourceAndPath { source, path } => (
            StorePredicate::SourceAndPath {
                source: source.clone(),
                path: path.clone(),
            },
            ResultShape::Documents,
        ),
        QueryIntent::GetStreamsByUuids { uuids } => (
            StorePredicate::UuidIn { uuids: uuids.clone() },
            ResultShape::Documents,
        ),
        QueryIntent::Unsupported => return None,
    };
    Some(QueryPlan { predicate, shape })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sources_matches_all() {
        let p = plan(&QueryIntent::ListSources).unwrap();
        assert_eq!(p.predicate, StorePredicate::MatchAll);
        assert_eq!(p.shape, ResultShape::DistinctSources);
    }

    #[test]
    fn test_list_paths() {
        let p = plan(&QueryIntent::ListPathsForSource { source: "s".into() }).unwrap();
        assert_eq!(p.predicate, StorePredicate::SourceIs { source: "s".into() });
        assert_eq!(p.shape, ResultShape::DistinctPaths);
    }

    #[test]
    fn test_document_shapes() {
        let by_path = plan(&QueryIntent::GetStreamsBySourceAndPath {
            source: "s".into(),
            path: "/p".into(),
        })
        .unwrap();
        assert_eq!(by_path.shape, ResultShape::Documents);

        let by_uuid = plan(&QueryIntent::GetStreamsByUuids { uuids: vec!["u".into()] }).unwrap();
        assert_eq!(by_uuid.predicate, StorePredicate::UuidIn { uuids: vec!["u".into()] });
        assert_eq!(by_uuid.shape, ResultShape::Documents);
    }

    #[test]
    fn test_unsupported_has_no_plan() {
        assert!(plan(&QueryIntent::Unsupported).is_none());
    }
}
