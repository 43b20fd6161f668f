//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (outcome counter, latency gauge)
//!
//! Consumers:
//!     → stdout (tracing subscriber)
//!     → GET /metrics (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
