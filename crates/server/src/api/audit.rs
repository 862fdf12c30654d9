//! Structured audit logging for stream queries.
//!
//! Tags arrive unauthenticated, so every query is recorded with the tags the
//! caller claimed and the access they resolved to. All events use
//! `target: "audit"` so operators can filter/route them via
//! `RUST_LOG=audit=info`.

use axum::http::HeaderMap;

/// Request context for one audited query.
#[derive(Clone, Debug)]
pub struct AuditContext {
    /// Client IP from `X-Forwarded-For` / `X-Real-IP` headers, or "-".
    pub client_ip: String,
    /// Tags as requested, after defaulting.
    pub tags: Vec<String>,
    /// Whether the resolved prefix set grants every path.
    pub unrestricted: bool,
}

/// Extract client IP from request headers (X-Forwarded-For → X-Real-IP → "-").
pub fn extract_client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or("-").trim().to_string())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Emit a structured audit log entry for a query.
pub fn audit_query(ctx: &AuditContext, intent: &str, results: usize, outcome: &str) {
    tracing::info!(
        target: "audit",
        client_ip = %ctx.client_ip,
        tags = %ctx.tags.join(","),
        unrestricted = ctx.unrestricted,
        intent = %intent,
        results = results,
        outcome = %outcome,
        "audit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_extract_ip_x_forwarded_for_chain() {
        // First IP in the chain is the original client
        let h = headers(&[("x-forwarded-for", "10.0.0.1, 172.16.0.1, 192.168.1.1")]);
        assert_eq!(extract_client_ip(&h), "10.0.0.1");
    }

    #[test]
    fn test_extract_ip_x_forwarded_for_with_spaces() {
        let h = headers(&[("x-forwarded-for", "  10.0.0.1 , 172.16.0.1")]);
        assert_eq!(extract_client_ip(&h), "10.0.0.1");
    }

    #[test]
    fn test_extract_ip_x_real_ip_fallback() {
        let h = headers(&[("x-real-ip", "172.16.0.5")]);
        assert_eq!(extract_client_ip(&h), "172.16.0.5");
    }

    #[test]
    fn test_extract_ip_forwarded_for_takes_precedence() {
        let h = headers(&[("x-forwarded-for", "10.0.0.1"), ("x-real-ip", "172.16.0.5")]);
        assert_eq!(extract_client_ip(&h), "10.0.0.1");
    }

    #[test]
    fn test_extract_ip_no_headers_returns_dash() {
        assert_eq!(extract_client_ip(&HeaderMap::new()), "-");
    }

    #[test]
    fn test_audit_query_does_not_panic() {
        let ctx = AuditContext {
            client_ip: "127.0.0.1".to_string(),
            tags: vec!["public".to_string(), "lab".to_string()],
            unrestricted: false,
        };
        // Should not panic regardless of subscriber
        audit_query(&ctx, "list_sources", 3, "success");
    }
}
