//! Configuration validation.
//!
//! Serde handles syntactic errors; this module checks semantics. All
//! violations are collected and reported together, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{DelayRange, ServiceConfig};

/// A semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Bind address does not parse as `host:port`.
    InvalidBindAddress(String),

    /// A delay range whose lower bound is above its upper bound.
    InvertedDelayRange {
        field: &'static str,
        min_ms: u64,
        max_ms: u64,
    },

    /// A probability outside `[0, 1]`.
    ProbabilityOutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvertedDelayRange {
                field,
                min_ms,
                max_ms,
            } => {
                write!(f, "{}: min_ms {} exceeds max_ms {}", field, min_ms, max_ms)
            }
            ValidationError::ProbabilityOutOfRange { field, value } => {
                write!(f, "{}: {} is outside [0, 1]", field, value)
            }
        }
    }
}

/// Validate a configuration, returning every violation found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    check_delay_range(&mut errors, "simulation.base_delay", config.simulation.base_delay);
    check_delay_range(&mut errors, "simulation.slow_delay", config.simulation.slow_delay);
    check_delay_range(
        &mut errors,
        "simulation.business_delay",
        config.simulation.business_delay,
    );

    check_probability(
        &mut errors,
        "simulation.low_threshold",
        config.simulation.low_threshold,
    );
    check_probability(
        &mut errors,
        "simulation.error_probability",
        config.simulation.error_probability,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_delay_range(errors: &mut Vec<ValidationError>, field: &'static str, range: DelayRange) {
    if range.min_ms > range.max_ms {
        errors.push(ValidationError::InvertedDelayRange {
            field,
            min_ms: range.min_ms,
            max_ms: range.max_ms,
        });
    }
}

fn check_probability(errors: &mut Vec<ValidationError>, field: &'static str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ValidationError::ProbabilityOutOfRange { field, value });
    }
}
