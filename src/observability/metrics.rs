//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_upstream_requests_total` (counter): outbound Jira calls by operation, status
//! - `relay_upstream_request_duration_seconds` (histogram): outbound call latency
//! - `relay_responses_total` (counter): inbound responses by route, status
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one outbound call. `status` is `None` on transport failure.
pub fn record_upstream_call(operation: &'static str, status: Option<StatusCode>, start: Instant) {
    let status = status.map_or_else(|| "error".to_string(), |s| s.as_u16().to_string());

    counter!(
        "relay_upstream_requests_total",
        "operation" => operation,
        "status" => status
    )
    .increment(1);

    histogram!(
        "relay_upstream_request_duration_seconds",
        "operation" => operation
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the status a route answered with.
pub fn record_response(route: &'static str, status: StatusCode) {
    counter!(
        "relay_responses_total",
        "route" => route,
        "status" => status.as_u16().to_string()
    )
    .increment(1);
}
