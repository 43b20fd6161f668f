//! Metrics collection and exposition.
//!
//! Two custom metric families, recorded once per request to every demo
//! route:
//! - `sus_transactions` (counter): outcome counts, labels `category`
//!   (low | high) and `component` (route path)
//! - `upstream_call_latency` (gauge): latest observed request latency in
//!   seconds, label `component`
//!
//! Label cardinality is bounded: 2 categories × 6 components.
//!
//! Handlers go through the named functions below and never touch the
//! macro syntax directly.

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

use crate::simulation::Category;

/// Install the Prometheus recorder and return the handle used to render
/// scrape output.
///
/// Must be called once, before any metrics are recorded. Fails if a
/// recorder is already installed.
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))?;

    describe_counter!(
        "sus_transactions",
        "Count of random values generated to mimic sus transactions"
    );
    describe_gauge!(
        "upstream_call_latency",
        "Latency of random number generation and processing mimicking upstream calls latency"
    );

    Ok(handle)
}

/// Count one simulated transaction outcome.
///
/// Metric: `sus_transactions`
/// Labels: `category` (low | high), `component` (route path)
pub fn record_transaction(category: Category, component: &'static str) {
    counter!("sus_transactions",
        "category" => category.as_str(),
        "component" => component
    )
    .increment(1);
}

/// Overwrite the latest observed latency for a route.
///
/// Metric: `upstream_call_latency`
/// Labels: `component` (route path)
pub fn set_upstream_latency(component: &'static str, latency: Duration) {
    gauge!("upstream_call_latency",
        "component" => component
    )
    .set(latency.as_secs_f64());
}
