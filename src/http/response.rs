//! JSON response bodies.
//!
//! Every field a caller needs to verify behavior is serialized; nothing is
//! derived server-side that tests cannot observe.

use serde::Serialize;

use crate::simulation::Category;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Unix seconds at the time the response was produced.
    pub timestamp: f64,
}

#[derive(Debug, Serialize)]
pub struct SlowResponse {
    pub message: &'static str,
    /// The drawn sleep duration in seconds.
    pub duration: f64,
}

#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub random_value: f64,
    pub category: Category,
    /// The drawn sleep duration in seconds.
    pub sleep_duration: f64,
    /// Measured wall time for the whole request in seconds.
    pub total_latency: f64,
    pub message: String,
}
