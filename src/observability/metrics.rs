//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gate_decisions_total` (counter): decisions by route class and action
//!
//! # Design Decisions
//! - Prometheus exposition on a separate listener
//! - Labels use the stable class/action strings from the policy layer

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exposition endpoint. Call once at startup.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(err) => tracing::error!(error = %err, "Failed to start metrics endpoint"),
    }
}

/// Record one gate decision.
pub fn record_decision(class: &'static str, action: &'static str) {
    counter!("gate_decisions_total", "class" => class, "action" => action).increment(1);
}
