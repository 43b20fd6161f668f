//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from config
//! files. Defaults carry the original demo constants; none of them have a
//! documented business meaning.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Simulated-workload tuning.
    pub simulation: SimulationConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// A uniform delay range in milliseconds.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct DelayRange {
    /// Lower bound, inclusive.
    pub min_ms: u64,
    /// Upper bound, exclusive.
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

/// Tuning for the simulated unit of work each endpoint performs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delay range for the ordinary routes (`/`, `/health`, `/error`,
    /// `/users/{id}`).
    pub base_delay: DelayRange,

    /// Delay range for `/slow`.
    pub slow_delay: DelayRange,

    /// Delay range for `/business`.
    pub business_delay: DelayRange,

    /// Outcome draws below this value are classified "low"; the rest
    /// "high". A draw exactly on the boundary is "high".
    pub low_threshold: f64,

    /// Probability that `/error` fails with a 500 after its work is done.
    pub error_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_delay: DelayRange::new(100, 200),
            slow_delay: DelayRange::new(100, 2000),
            business_delay: DelayRange::new(100, 300),
            low_threshold: 0.1,
            error_probability: 0.3,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus recorder and the `/metrics` endpoint.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
