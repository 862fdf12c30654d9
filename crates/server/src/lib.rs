//! HTTP server for streamdex.
//!
//! Provides the query endpoint, liveness probe, metrics, and audit logging.
//! Query parsing, access control and the store live in `streamdex-core`.

/// REST API layer: Axum router, HTTP handlers, models, audit, metrics.
pub mod api;
