//! Request parameter types for the query API.

use serde::Deserialize;
use streamdex_core::config::DEFAULT_TAG;

/// URL query parameters accepted by `POST /`.
///
/// Unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    /// Comma-separated tag list, e.g. `tags=public,lab`.
    pub tags: Option<String>,
}

impl QueryParams {
    /// The caller's tags: comma-separated, trimmed, empty entries dropped.
    /// Falls back to `public` when nothing remains.
    pub fn tag_list(&self) -> Vec<String> {
        let tags: Vec<String> = self
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            vec![DEFAULT_TAG.to_string()]
        } else {
            tags
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(tags: Option<&str>) -> QueryParams {
        QueryParams {
            tags: tags.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_tags_default_to_public() {
        assert_eq!(params(None).tag_list(), vec!["public"]);
    }

    #[test]
    fn test_empty_tags_default_to_public() {
        assert_eq!(params(Some("")).tag_list(), vec!["public"]);
        assert_eq!(params(Some(" , ,")).tag_list(), vec!["public"]);
    }

    #[test]
    fn test_comma_separated() {
        assert_eq!(params(Some("a,b, c")).tag_list(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_public_not_added_when_tags_given() {
        assert_eq!(params(Some("lab")).tag_list(), vec!["lab"]);
    }

    #[test]
    fn test_deserialize_from_query_string() {
        let p: QueryParams = from_query_string("tags=a%2Cb&other=1");
        assert_eq!(p.tag_list(), vec!["a", "b"]);
    }

    fn from_query_string(qs: &str) -> QueryParams {
        let uri: axum::http::Uri = format!("http://x/?{qs}").parse().unwrap();
        axum::extract::Query::<QueryParams>::try_from_uri(&uri)
            .unwrap()
            .0
    }
}
