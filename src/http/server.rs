//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all demo routes and the scrape endpoint
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a caller-supplied listener until shutdown is signaled

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request_id::propagate_request_id;
use crate::simulation::{RandomSource, ThreadRngSource, WorkSimulator};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub simulator: WorkSimulator,
    /// Present only when the Prometheus recorder is installed.
    pub metrics_handle: Option<PrometheusHandle>,
}

/// HTTP server for the demo service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the production randomness source.
    pub fn new(config: ServiceConfig, metrics_handle: Option<PrometheusHandle>) -> Self {
        Self::with_random_source(config, metrics_handle, Arc::new(ThreadRngSource))
    }

    /// Create a server with a caller-supplied randomness source.
    ///
    /// Tests use this to script deterministic outcomes.
    pub fn with_random_source(
        config: ServiceConfig,
        metrics_handle: Option<PrometheusHandle>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let config = Arc::new(config);
        let simulator = WorkSimulator::new(random, &config.simulation);

        let state = AppState {
            config: config.clone(),
            simulator,
            metrics_handle,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/slow", get(handlers::slow))
            .route("/error", get(handlers::simulated_error))
            .route("/users/{user_id}", get(handlers::get_user))
            .route("/business", get(handlers::business))
            .route("/metrics", get(handlers::metrics_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn(propagate_request_id))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
