//! Predicate evaluation for stream documents.
//!
//! Evaluates a [`StorePredicate`](crate::filter_types::StorePredicate)
//! against a [`StoredDocument`]. Documents missing a compared field never match.

use crate::document::StoredDocument;
use crate::filter_types::StorePredicate;

/// Check whether a stored document satisfies the predicate.
pub fn matches_predicate(doc: &StoredDocument, predicate: &StorePredicate) -> bool {
    match predicate {
        StorePredicate::MatchAll => true,
        StorePredicate::SourceIs { source } => doc.source_name() == Some(source.as_str()),
        StorePredicate::SourceAndPath { source, path } => {
            doc.source_name() == Some(source.as_str()) && doc.path() == Some(path.as_str())
        }
        StorePredicate::UuidIn { uuids } => match doc.uuid() {
            Some(uuid) => uuids.iter().any(|u| u == uuid),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stream(source: &str, path: &str, uuid: &str) -> StoredDocument {
        StoredDocument::from_value(json!({
            "_id": uuid,
            "Path": path,
            "uuid": uuid,
            "Metadata": {"SourceName": source}
        }))
        .unwrap()
    }

    #[test]
    fn test_match_all() {
        let d = StoredDocument::from_value(json!({})).unwrap();
        assert!(matches_predicate(&d, &StorePredicate::MatchAll));
    }

    #[test]
    fn test_source_is_exact() {
        let d = stream("Soda Hall", "/soda/1", "u1");
        let hit = StorePredicate::SourceIs { source: "Soda Hall".into() };
        let case = StorePredicate::SourceIs { source: "soda hall".into() };
        let partial = StorePredicate::SourceIs { source: "Soda".into() };
        assert!(matches_predicate(&d, &hit));
        assert!(!matches_predicate(&d, &case));
        assert!(!matches_predicate(&d, &partial));
    }

    #[test]
    fn test_source_and_path_requires_both() {
        let d = stream("Soda Hall", "/soda/1", "u1");
        let both = StorePredicate::SourceAndPath {
            source: "Soda Hall".into(),
            path: "/soda/1".into(),
        };
        let wrong_path = StorePredicate::SourceAndPath {
            source: "Soda Hall".into(),
            path: "/soda/2".into(),
        };
        let prefix_path = StorePredicate::SourceAndPath {
            source: "Soda Hall".into(),
            path: "/soda".into(),
        };
        assert!(matches_predicate(&d, &both));
        assert!(!matches_predicate(&d, &wrong_path));
        assert!(!matches_predicate(&d, &prefix_path));
    }

    #[test]
    fn test_uuid_in_is_or() {
        let pred = StorePredicate::UuidIn { uuids: vec!["u1".into(), "u2".into()] };
        assert!(matches_predicate(&stream("s", "/a", "u1"), &pred));
        assert!(matches_predicate(&stream("s", "/b", "u2"), &pred));
        assert!(!matches_predicate(&stream("s", "/c", "u3"), &pred));
    }

    #[test]
    fn test_uuid_in_empty_matches_nothing() {
        let pred = StorePredicate::UuidIn { uuids: vec![] };
        assert!(!matches_predicate(&stream("s", "/a", "u1"), &pred));
    }

    #[test]
    fn test_missing_metadata_never_matches_source() {
        let d = StoredDocument::from_value(json!({"Path": "/a", "uuid": "u1"})).unwrap();
        assert!(!matches_predicate(&d, &StorePredicate::SourceIs { source: "".into() }));
    }
}
