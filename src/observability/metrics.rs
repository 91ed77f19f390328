//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dispatch_requests_total` (counter): total dispatches by method, status,
//!   route
//! - `dispatch_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Labels for method, status code, and matched route ("none" for 404s)
//! - Recording without an installed exporter is a no-op, so the dispatcher
//!   never checks whether metrics are enabled

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Must run inside the Tokio runtime; the exporter serves scrapes from a
/// background task.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics exporter started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start metrics exporter");
        }
    }
}

/// Record one finished dispatch.
pub fn record_request(method: &str, status: u16, route: &str, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("route", route.to_string()),
    ];
    metrics::counter!("dispatch_requests_total", &labels).increment(1);
    metrics::histogram!("dispatch_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}
