//! Request counters for monitoring.
//!
//! Uses the `metrics` facade: counters are described once at startup and
//! incremented by the handlers. Without an installed recorder every call
//! is a no-op, so the handlers never pay for disabled metrics.

use metrics::{counter, describe_counter};
use tracing::debug;

// === Metric Name Constants ===

/// Service info requests counter metric name.
pub const METRIC_INFO_REQUESTS: &str = "info_requests_total";
/// Health checks counter metric name.
pub const METRIC_HEALTH_CHECKS: &str = "health_checks_total";
/// Unmatched routes counter metric name.
pub const METRIC_UNMATCHED_ROUTES: &str = "unmatched_routes_total";
/// Handler panics counter metric name.
pub const METRIC_HANDLER_PANICS: &str = "handler_panics_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_INFO_REQUESTS,
        "Total number of service info requests served"
    );
    describe_counter!(
        METRIC_HEALTH_CHECKS,
        "Total number of health checks served"
    );
    describe_counter!(
        METRIC_UNMATCHED_ROUTES,
        "Total number of requests to unregistered paths"
    );
    describe_counter!(
        METRIC_HANDLER_PANICS,
        "Total number of panics caught at the response boundary"
    );

    debug!("Metrics initialized");
}

/// Increment the service info requests counter.
pub fn inc_info_requests() {
    counter!(METRIC_INFO_REQUESTS).increment(1);
}

/// Increment the health checks counter.
pub fn inc_health_checks() {
    counter!(METRIC_HEALTH_CHECKS).increment(1);
}

/// Increment the unmatched routes counter.
pub fn inc_unmatched_routes() {
    counter!(METRIC_UNMATCHED_ROUTES).increment(1);
}

/// Increment the handler panics counter.
pub fn inc_handler_panics() {
    counter!(METRIC_HANDLER_PANICS).increment(1);
}
