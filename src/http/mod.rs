//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → handlers.rs (simulated work + metrics recording)
//!     → response.rs / error.rs (JSON bodies, status mapping)
//! ```

pub mod error;
pub mod handlers;
pub mod request_id;
pub mod response;
pub mod server;

pub use error::ServiceError;
pub use request_id::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
