//! Prometheus metrics for core components.

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Catalog store operations by operation and result.
pub static CATALOG_OPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "lectern_catalog_operations_total",
            "Catalog store operations",
        ),
        &["op", "result"], // op: insert/get/list_all/list_by_category/delete
    )
    .unwrap()
});

/// Client requests by operation and result.
pub static CLIENT_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "lectern_client_requests_total",
            "Catalog client HTTP requests",
        ),
        &["op", "result"],
    )
    .unwrap()
});
