//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use metrics_demo::config::{DelayRange, ServiceConfig};
use metrics_demo::http::HttpServer;
use metrics_demo::lifecycle::Shutdown;
use metrics_demo::simulation::RandomSource;
use metrics_exporter_prometheus::PrometheusHandle;

/// A service instance running on an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Spawn a service on an ephemeral port. Pass a random source to script
/// outcomes; `None` uses the production thread-local RNG.
pub async fn spawn_service(
    config: ServiceConfig,
    metrics_handle: Option<PrometheusHandle>,
    random: Option<Arc<dyn RandomSource>>,
) -> TestService {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = match random {
        Some(random) => HttpServer::with_random_source(config, metrics_handle, random),
        None => HttpServer::new(config, metrics_handle),
    };

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestService { addr, shutdown }
}

/// Config with millisecond-scale delays so tests stay fast.
pub fn fast_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.simulation.base_delay = DelayRange::new(1, 2);
    config.simulation.slow_delay = DelayRange::new(1, 5);
    config.simulation.business_delay = DelayRange::new(1, 2);
    config
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
