//! Query execution: planning, predicate evaluation, access filtering and
//! result shaping.

/// End-to-end query pipeline.
pub mod engine;
/// Predicate evaluation against stored documents.
pub mod filter;
/// Intent → store lookup translation.
pub mod plan;
/// Query result types.
pub mod types;

pub use engine::execute;
pub use plan::plan;
pub use types::QueryResult;
