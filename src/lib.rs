//! Simulated-workload metrics demo service.
//!
//! Exposes a handful of JSON endpoints that fake upstream latency and
//! probabilistic failure, recording a labeled outcome counter and a
//! per-route latency gauge for every request. Current metric state is
//! served in Prometheus text format at `/metrics`.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod simulation;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
