//! Metrics collection and exposition.
//!
//! # Metrics
//! - `facade_requests_total` (counter): inbound requests by method, route, status
//! - `facade_request_duration_seconds` (histogram): inbound latency by method, route
//! - `facade_upstream_requests_total` (counter): upstream calls by method, outcome
//! - `facade_upstream_duration_seconds` (histogram): upstream latency by method

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let method = method.to_owned();
    let route = route.to_owned();
    counter!(
        "facade_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "facade_request_duration_seconds",
        "method" => method,
        "route" => route
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_call(method: &str, status: u16, start: Instant) {
    record_upstream(method, status.to_string(), start);
}

pub fn record_upstream_failure(method: &str, start: Instant) {
    record_upstream(method, "error".to_owned(), start);
}

fn record_upstream(method: &str, outcome: String, start: Instant) {
    let method = method.to_owned();
    counter!(
        "facade_upstream_requests_total",
        "method" => method.clone(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("facade_upstream_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
