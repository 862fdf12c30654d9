//! HTTP request handlers and shared application state.

use crate::api::audit::{audit_query, extract_client_ip, AuditContext};
use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::QueryParams;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use streamdex_core::access::AuthorizationMap;
use streamdex_core::config;
use streamdex_core::query::parse_query;
use streamdex_core::search::execute;
use streamdex_core::storage::StreamStore;

/// Shared application state passed to every handler via Axum's `State` extractor.
///
/// Everything here is read-only after startup; handlers never take locks on it.
#[derive(Clone)]
pub struct AppState {
    /// Tag definitions, loaded once at startup.
    pub authz: Arc<AuthorizationMap>,
    /// Stream document store. Provides its own internal synchronization.
    pub store: Arc<dyn StreamStore>,
    pub prometheus_handle: PrometheusHandle,
    /// Upper bound on one request's total handling time.
    pub request_timeout: Duration,
}

/// `GET /`
pub async fn liveness() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        config::LIVENESS_BODY,
    )
}

/// `POST /?tags=t1,t2`
///
/// The body is one query. An empty body is a 400; any other body, including
/// unrecognized text, is a 200 with a JSON array.
pub async fn query(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest(config::EMPTY_QUERY_MESSAGE.into()));
    }

    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable query string, assuming no tags");
            QueryParams::default()
        }
    };
    let tags = params.tag_list();
    let access = state.authz.resolve(&tags);

    let text = String::from_utf8_lossy(&body);
    let intent = parse_query(&text);
    let kind = intent.kind();

    let ctx = AuditContext {
        client_ip: extract_client_ip(&headers),
        tags,
        unrestricted: access.is_unrestricted(),
    };

    let store = state.store.clone();
    let outcome =
        tokio::task::spawn_blocking(move || execute(store.as_ref(), &intent, &access)).await;

    let result = match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::error!(intent = kind, error = %e, "Store query failed");
            metrics::record_store_error(kind);
            audit_query(&ctx, kind, 0, "store_error");
            return Err(ApiError::Internal("Query failed".into()));
        }
        Err(e) => {
            tracing::error!(intent = kind, error = %e, "Query task aborted");
            metrics::record_store_error(kind);
            audit_query(&ctx, kind, 0, "aborted");
            return Err(ApiError::Internal("Query failed".into()));
        }
    };

    let body = result.to_json_string().map_err(|e| {
        tracing::error!(intent = kind, error = %e, "Result serialization failed");
        ApiError::Internal("Query failed".into())
    })?;

    metrics::record_query(kind, result.len());
    audit_query(&ctx, kind, result.len(), "success");
    tracing::info!(intent = kind, results = result.len(), "Query completed");

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    metrics::set_store_documents(state.store.len());
    state.prometheus_handle.render()
}
