//! Metrics collection and exposition.
//!
//! # Metrics
//! - `workspace_requests_total` (counter): requests by operation, status
//! - `workspace_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Labels for operation and status code
//! - The exporter serves a Prometheus scrape endpoint on its own address

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter. Failure to bind is logged, not fatal.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, "Failed to install Prometheus exporter");
    } else {
        tracing::info!(address = %addr, "Metrics endpoint started");
    }
}

/// Record one handled request.
pub fn record_request(operation: &str, status: u16, started: Instant) {
    let labels = [
        ("operation", operation.to_string()),
        ("status", status.to_string()),
    ];
    counter!("workspace_requests_total", &labels).increment(1);
    histogram!("workspace_request_duration_seconds", &labels)
        .record(started.elapsed().as_secs_f64());
}
