//! Prometheus metrics recording.

use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records one executed query and its result size.
pub fn record_query(intent: &str, results: usize) {
    counter!("streamdex_queries_total", "intent" => intent.to_string()).increment(1);
    histogram!("streamdex_query_results", "intent" => intent.to_string()).record(results as f64);
}

/// Records a query that failed in the store.
pub fn record_store_error(intent: &str) {
    counter!("streamdex_store_errors_total", "intent" => intent.to_string()).increment(1);
}

/// Updates the `streamdex_store_documents` gauge.
pub fn set_store_documents(count: usize) {
    gauge!("streamdex_store_documents").set(count as f64);
}
