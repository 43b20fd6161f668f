//! Handler error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Intentional failure from the error-demo route. Drawn after metrics
    /// are recorded, so the failure never rolls them back.
    #[error("Random server error")]
    SimulatedServer,

    /// Scrape endpoint hit while the exporter is disabled.
    #[error("metrics exporter is disabled")]
    MetricsDisabled,
}

impl ServiceError {
    fn status(&self) -> StatusCode {
        match self {
            ServiceError::SimulatedServer => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::MetricsDisabled => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
