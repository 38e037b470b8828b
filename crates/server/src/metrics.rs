//! Prometheus metrics for the catalog service.
//!
//! HTTP request metrics live here; store and client counters come from
//! `lectern_core::metrics` and are registered into the same registry.

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "lectern_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("lectern_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "lectern_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

/// Authentication failures.
pub static AUTH_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "lectern_auth_failures_total",
            "Total authentication failures",
        ),
        &["reason"],
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();
    registry
        .register(Box::new(AUTH_FAILURES_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(lectern_core::metrics::CATALOG_OPS.clone()))
        .unwrap();
    registry
        .register(Box::new(lectern_core::metrics::CLIENT_REQUESTS.clone()))
        .unwrap();
}

/// Collapse id-bearing paths so metric labels stay low-cardinality.
pub fn normalize_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("/api/videos/") {
        if rest.starts_with("category/") {
            return "/api/videos/category/{category}".to_string();
        }
        if !rest.is_empty() {
            return "/api/videos/{id}".to_string();
        }
    }
    path.to_string()
}

/// Render the registry in the Prometheus text exposition format.
pub fn render() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/api/videos"), "/api/videos");
        assert_eq!(normalize_path("/api/videos/abc-123"), "/api/videos/{id}");
        assert_eq!(
            normalize_path("/api/videos/category/Programming"),
            "/api/videos/category/{category}"
        );
        assert_eq!(normalize_path("/api/health"), "/api/health");
    }

    #[test]
    fn test_render_contains_registered_families() {
        // Touch a metric so at least one family has a sample
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/api/health", "200"])
            .inc();
        let text = render();
        assert!(text.contains("lectern_http_requests_total"));
    }
}
