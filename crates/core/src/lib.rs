//! # streamdex-core
//!
//! Query engine for a read-only metadata store of named streams. A stream is
//! a path-addressed JSON document with a `uuid` and a `Metadata.SourceName`.
//!
//! This is the core library crate with zero async dependencies. It parses the
//! textual query surface, translates queries into store predicates, restricts
//! results to the path prefixes a caller's tags grant, and renders results as
//! JSON.
//!
//! ```text
//! raw query → query::parse_query → search::plan → StreamStore::find
//!           → access::PrefixSet filter → search::QueryResult → JSON
//! ```

/// Tag → path-prefix authorization and the per-request access filter.
pub mod access;
/// Global configuration constants: protocol literals, limits, and defaults.
pub mod config;
/// Stream document types: stored records and their public projection.
pub mod document;
/// Store predicate and result-shape types.
pub mod filter_types;
/// Query tokenizer and intent parser.
pub mod query;
/// Query planning, predicate evaluation, and the execution pipeline.
pub mod search;
/// Storage layer: the `StreamStore` trait, in-memory backend, and snapshot loading.
pub mod storage;
