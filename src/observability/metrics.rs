//! Metrics collection.
//!
//! # Metrics
//! - `checkout_events_total` (counter): analytics events by name
//! - `checkout_attempts_total` (counter): payment attempts by outcome
//! - `checkout_initiation_duration_seconds` (histogram): initiation round-trip latency
//!
//! # Design Decisions
//! - In-process Prometheus recorder; the CLI renders a snapshot when it exits
//! - Updates are no-ops when no recorder is installed

use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::ObservabilityConfig;

/// Install the Prometheus recorder if metrics are enabled.
pub fn init_metrics(config: &ObservabilityConfig) -> Option<PrometheusHandle> {
    if !config.metrics_enabled {
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            tracing::debug!("Metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics recorder");
            None
        }
    }
}

pub fn record_attempt(outcome: &'static str) {
    ::metrics::counter!("checkout_attempts_total", "outcome" => outcome).increment(1);
}

pub fn record_initiation_latency(elapsed: Duration) {
    ::metrics::histogram!("checkout_initiation_duration_seconds").record(elapsed.as_secs_f64());
}
