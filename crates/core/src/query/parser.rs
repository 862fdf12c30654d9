//! Classification of raw query text into a closed set of intents.
//!
//! Four literal query shapes are recognized. Each is identified by its
//! leading keyword words; string parameters are the double-quoted literals
//! that follow, in order. Anything else is [`QueryIntent::Unsupported`],
//! which is a normal outcome rather than an error.

use super::tokenizer::{tokenize, Segment};

const LIST_SOURCES: &[&str] = &["select", "distinct", "Metadata/SourceName"];
const LIST_PATHS: &[&str] = &["select", "distinct", "Path", "where", "Metadata/SourceName"];
const STREAMS_BY_SOURCE_AND_PATH: &[&str] = &["select", "*", "where", "Metadata/SourceName"];
const STREAMS_BY_UUID: &[&str] = &["select", "*", "where", "uuid", "="];

/// What a query asks for, with its extracted literal parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// `select distinct Metadata/SourceName`
    ListSources,
    /// `select distinct Path where Metadata/SourceName = "<source>"`
    ListPathsForSource { source: String },
    /// `select * where Metadata/SourceName = "<source>" and Path = "<path>"`
    GetStreamsBySourceAndPath { source: String, path: String },
    /// `select * where uuid = "<u1>" or "<u2>" ...`
    GetStreamsByUuids { uuids: Vec<String> },
    /// Any other text.
    Unsupported,
}

impl QueryIntent {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryIntent::ListSources => "list_sources",
            QueryIntent::ListPathsForSource { .. } => "list_paths_for_source",
            QueryIntent::GetStreamsBySourceAndPath { .. } => "streams_by_source_and_path",
            QueryIntent::GetStreamsByUuids { .. } => "streams_by_uuids",
            QueryIntent::Unsupported => "unsupported",
        }
    }
}

/// Classify raw query text.
///
/// Trailing whitespace and then a single trailing `;` are stripped first, so
/// `select distinct Metadata/SourceName;` parses like its unterminated form.
pub fn parse_query(raw: &str) -> QueryIntent {
    let text = raw.trim_end();
    let text = text.strip_suffix(';').unwrap_or(text);

    let segments = match tokenize(text) {
        Ok(segments) => segments,
        Err(e) => {
            tracing::debug!(error = %e, "query does not tokenize");
            return QueryIntent::Unsupported;
        }
    };

    let head: Vec<&str> = segments.iter().map_while(Segment::as_word).collect();
    let mut literals = segments.iter().filter_map(Segment::as_literal).map(str::to_string);

    if head == LIST_SOURCES && segments.len() == LIST_SOURCES.len() {
        return QueryIntent::ListSources;
    }
    if head.starts_with(LIST_PATHS) {
        return match literals.next() {
            Some(source) => QueryIntent::ListPathsForSource { source },
            None => QueryIntent::Unsupported,
        };
    }
    if head.starts_with(STREAMS_BY_SOURCE_AND_PATH) {
        return match (literals.next(), literals.next()) {
            (Some(source), Some(path)) => QueryIntent::GetStreamsBySourceAndPath { source, path },
            _ => QueryIntent::Unsupported,
        };
    }
    if head.starts_with(STREAMS_BY_UUID) {
        let uuids: Vec<String> = literals.collect();
        if uuids.is_empty() {
            return QueryIntent::Unsupported;
        }
        return QueryIntent::GetStreamsByUuids { uuids };
    }

    QueryIntent::Unsupported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sources() {
        assert_eq!(parse_query("select distinct Metadata/SourceName"), QueryIntent::ListSources);
    }

    #[test]
    fn test_trailing_semicolon_is_inert() {
        assert_eq!(parse_query("select distinct Metadata/SourceName;"), QueryIntent::ListSources);
        assert_eq!(
            parse_query("select distinct Metadata/SourceName;\n"),
            QueryIntent::ListSources
        );
        assert_eq!(
            parse_query(r#"select * where uuid = "u1";"#),
            QueryIntent::GetStreamsByUuids { uuids: vec!["u1".into()] }
        );
    }

    #[test]
    fn test_only_one_semicolon_stripped() {
        assert_eq!(
            parse_query("select distinct Metadata/SourceName;;"),
            QueryIntent::Unsupported
        );
    }

    #[test]
    fn test_list_sources_requires_exact_text() {
        assert_eq!(
            parse_query("select distinct Metadata/SourceName where x"),
            QueryIntent::Unsupported
        );
        assert_eq!(
            parse_query(r#"select distinct Metadata/SourceName "x""#),
            QueryIntent::Unsupported
        );
        assert_eq!(parse_query("SELECT DISTINCT Metadata/SourceName"), QueryIntent::Unsupported);
    }

    #[test]
    fn test_list_paths_for_source() {
        assert_eq!(
            parse_query(r#"select distinct Path where Metadata/SourceName = "Soda Hall""#),
            QueryIntent::ListPathsForSource { source: "Soda Hall".into() }
        );
    }

    #[test]
    fn test_list_paths_without_literal_is_unsupported() {
        assert_eq!(
            parse_query("select distinct Path where Metadata/SourceName = Soda"),
            QueryIntent::Unsupported
        );
    }

    #[test]
    fn test_streams_by_source_and_path() {
        assert_eq!(
            parse_query(
                r#"select * where Metadata/SourceName = "Soda Hall" and Path = "/soda/a/temp""#
            ),
            QueryIntent::GetStreamsBySourceAndPath {
                source: "Soda Hall".into(),
                path: "/soda/a/temp".into(),
            }
        );
    }

    #[test]
    fn test_equals_glued_to_keywords() {
        assert_eq!(
            parse_query(r#"select distinct Path where Metadata/SourceName="Soda""#),
            QueryIntent::ListPathsForSource { source: "Soda".into() }
        );
        let expected = QueryIntent::GetStreamsBySourceAndPath {
            source: "Soda".into(),
            path: "/p".into(),
        };
        assert_eq!(
            parse_query(r#"select * where Metadata/SourceName="Soda" and Path="/p""#),
            expected
        );
        assert_eq!(
            parse_query(r#"select * where Metadata/SourceName = "Soda" and Path="/p""#),
            expected
        );
        assert_eq!(
            parse_query(r#"select * where uuid="u1" or "u2""#),
            QueryIntent::GetStreamsByUuids {
                uuids: vec!["u1".into(), "u2".into()],
            }
        );
    }

    #[test]
    fn test_streams_by_source_needs_two_literals() {
        assert_eq!(
            parse_query(r#"select * where Metadata/SourceName = "Soda Hall""#),
            QueryIntent::Unsupported
        );
    }

    #[test]
    fn test_streams_by_uuids_collects_all_literals() {
        assert_eq!(
            parse_query(r#"select * where uuid = "u1" or uuid = "u2" or "u3""#),
            QueryIntent::GetStreamsByUuids {
                uuids: vec!["u1".into(), "u2".into(), "u3".into()],
            }
        );
    }

    #[test]
    fn test_streams_by_uuids_without_literals() {
        assert_eq!(parse_query("select * where uuid ="), QueryIntent::Unsupported);
    }

    #[test]
    fn test_embedded_quote_does_not_shift_literals() {
        assert_eq!(
            parse_query(r#"select * where Metadata/SourceName = "Bob\"s lab" and Path = "/b/1""#),
            QueryIntent::GetStreamsBySourceAndPath {
                source: r#"Bob"s lab"#.into(),
                path: "/b/1".into(),
            }
        );
    }

    #[test]
    fn test_unterminated_literal_is_unsupported() {
        assert_eq!(parse_query(r#"select * where uuid = "u1"#), QueryIntent::Unsupported);
    }

    #[test]
    fn test_extra_whitespace_between_keywords() {
        assert_eq!(
            parse_query("select   distinct\tMetadata/SourceName"),
            QueryIntent::ListSources
        );
    }

    #[test]
    fn test_unrecognized_text() {
        assert_eq!(parse_query(r#""drop everything""#), QueryIntent::Unsupported);
        assert_eq!(parse_query("drop everything"), QueryIntent::Unsupported);
        assert_eq!(parse_query(";"), QueryIntent::Unsupported);
        assert_eq!(parse_query("select"), QueryIntent::Unsupported);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(QueryIntent::ListSources.kind(), "list_sources");
        assert_eq!(QueryIntent::Unsupported.kind(), "unsupported");
    }
}
