//! Tag-based access control over stream paths.
//!
//! An [`AuthorizationMap`] maps each tag to the path prefixes it grants. It is
//! loaded once at startup and never mutated, so one instance can be shared by
//! reference across every request. [`AuthorizationMap::resolve`] turns a
//! caller's tag list into a [`PrefixSet`], which decides per document whether
//! its `Path` is visible.
//!
//! An empty resolved prefix set means *unrestricted* under
//! [`UnknownTagPolicy::Allow`], the default. That includes callers whose tags
//! are all undefined. [`UnknownTagPolicy::Deny`] turns the same case into no
//! access at all.
//!
//! The reserved [`ALL_TAG`] lifts every restriction under both policies,
//! whatever the definitions file says about it.

use crate::config::{ALL_TAG, DEFAULT_TAG};
use crate::document::StoredDocument;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Failure to load the tag definition resource.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tag definitions '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("tag definitions '{path}' must be a JSON object mapping each tag to a list of path prefixes: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How a resolved prefix set with no entries is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Empty prefix set grants access to every stream.
    #[default]
    Allow,
    /// Empty prefix set grants access to nothing.
    Deny,
}

/// Immutable mapping from tag name to granted path prefixes.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationMap {
    tags: HashMap<String, BTreeSet<String>>,
    policy: UnknownTagPolicy,
}

impl AuthorizationMap {
    /// Builds a map from `(tag, prefixes)` pairs with the default policy.
    pub fn from_entries<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, P)>,
        P: IntoIterator<Item = String>,
    {
        let tags = entries
            .into_iter()
            .map(|(tag, prefixes)| (tag, prefixes.into_iter().collect()))
            .collect();
        Self {
            tags,
            policy: UnknownTagPolicy::default(),
        }
    }

    /// Parses a JSON object of the form `{"tag": ["/prefix/", ...], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    /// Loads tag definitions from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_json_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            tags = map.tags.len(),
            "Loaded tag definitions"
        );
        Ok(map)
    }

    /// Sets how an empty resolved prefix set is interpreted.
    pub fn with_unknown_tag_policy(mut self, policy: UnknownTagPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Union of the prefixes granted by every tag in `tags`.
    ///
    /// Undefined tags contribute nothing and are not an error. An empty tag
    /// list resolves the default `public` tag. Requesting `all` is
    /// unrestricted.
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S]) -> PrefixSet {
        if tags.iter().any(|t| t.as_ref() == ALL_TAG) {
            return PrefixSet::unrestricted();
        }
        let mut prefixes = BTreeSet::new();
        if tags.is_empty() {
            self.collect_prefixes(DEFAULT_TAG, &mut prefixes);
        } else {
            for tag in tags {
                self.collect_prefixes(tag.as_ref(), &mut prefixes);
            }
        }
        let unrestricted = prefixes.is_empty() && self.policy == UnknownTagPolicy::Allow;
        PrefixSet {
            prefixes,
            unrestricted,
        }
    }

    fn collect_prefixes(&self, tag: &str, out: &mut BTreeSet<String>) {
        match self.tags.get(tag) {
            Some(granted) => out.extend(granted.iter().cloned()),
            None => tracing::debug!(tag, "Tag is not defined, grants nothing"),
        }
    }
}

/// The path prefixes visible to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: BTreeSet<String>,
    unrestricted: bool,
}

impl PrefixSet {
    /// A set that permits every path.
    pub fn unrestricted() -> Self {
        Self {
            prefixes: BTreeSet::new(),
            unrestricted: true,
        }
    }

    /// True when every path is visible.
    pub fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    pub fn prefixes(&self) -> &BTreeSet<String> {
        &self.prefixes
    }

    /// Plain string-prefix check, not path-segment aware: `/a/b` covers `/a/bc`.
    pub fn permits(&self, path: &str) -> bool {
        self.unrestricted || self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Documents without a string `Path` are only visible when unrestricted.
    pub fn permits_document(&self, doc: &StoredDocument) -> bool {
        match doc.path() {
            Some(path) => self.permits(path),
            None => self.unrestricted,
        }
    }
}
