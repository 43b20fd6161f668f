//! Endpoint handlers.
//!
//! Every demo route runs the same instrumented pattern: simulate a unit of
//! work, count the outcome, overwrite the route's latency gauge, then build
//! the response. The `/error` route draws its failure *after* recording, so
//! a 500 leaves the metrics in place.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Path, State};
use axum::Json;

use crate::config::DelayRange;
use crate::http::error::ServiceError;
use crate::http::response::{
    BusinessResponse, HealthResponse, OutcomeResponse, RootResponse, SlowResponse, UserResponse,
};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::simulation::WorkOutcome;

/// Simulate one unit of work for a route and record its metrics.
///
/// Exactly one counter increment and one gauge set per call.
async fn instrumented_work(
    state: &AppState,
    component: &'static str,
    range: DelayRange,
) -> WorkOutcome {
    let outcome = state.simulator.simulate(range).await;

    metrics::record_transaction(outcome.category, component);
    metrics::set_upstream_latency(component, outcome.elapsed);

    tracing::debug!(
        component,
        category = outcome.category.as_str(),
        elapsed_secs = outcome.elapsed.as_secs_f64(),
        "Simulated work complete"
    );

    outcome
}

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    instrumented_work(&state, "/", state.config.simulation.base_delay).await;

    Json(RootResponse {
        message: "Hello World from the metrics demo service!",
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    instrumented_work(&state, "/health", state.config.simulation.base_delay).await;

    Json(HealthResponse {
        status: "healthy",
        timestamp: unix_timestamp(),
    })
}

pub async fn slow(State(state): State<AppState>) -> Json<SlowResponse> {
    let outcome = instrumented_work(&state, "/slow", state.config.simulation.slow_delay).await;

    Json(SlowResponse {
        message: "This was a slow operation",
        duration: outcome.sleep_duration.as_secs_f64(),
    })
}

pub async fn simulated_error(
    State(state): State<AppState>,
) -> Result<Json<OutcomeResponse>, ServiceError> {
    instrumented_work(&state, "/error", state.config.simulation.base_delay).await;

    // Drawn after the metrics side effects; a failure must not undo them.
    if state.simulator.draw_failure() {
        tracing::warn!(component = "/error", "Simulated server error");
        return Err(ServiceError::SimulatedServer);
    }

    Ok(Json(OutcomeResponse { message: "Success!" }))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Json<UserResponse> {
    // The component label stays "/users" so the id does not fan out the
    // metric series.
    instrumented_work(&state, "/users", state.config.simulation.base_delay).await;

    Json(UserResponse {
        user_id,
        name: format!("User {user_id}"),
        active: true,
    })
}

pub async fn business(State(state): State<AppState>) -> Json<BusinessResponse> {
    let outcome =
        instrumented_work(&state, "/business", state.config.simulation.business_delay).await;

    Json(BusinessResponse {
        random_value: outcome.random_value,
        category: outcome.category,
        sleep_duration: outcome.sleep_duration.as_secs_f64(),
        total_latency: outcome.elapsed.as_secs_f64(),
        message: format!(
            "Random value {:.4} categorized as '{}'",
            outcome.random_value,
            outcome.category.as_str()
        ),
    })
}

/// Prometheus scrape endpoint. Performs no simulated work and records
/// nothing about itself.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, ServiceError> {
    match &state.metrics_handle {
        Some(handle) => Ok(handle.render()),
        None => Err(ServiceError::MetricsDisabled),
    }
}

fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
