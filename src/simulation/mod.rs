//! Simulated-workload subsystem.
//!
//! # Data Flow
//! ```text
//! handler invocation
//!     → random.rs (uniform draws, injectable for tests)
//!     → work.rs (delay draw, cooperative sleep, outcome classification)
//!     → WorkOutcome (ephemeral, owned by the request)
//! ```
//!
//! # Design Decisions
//! - Randomness sits behind a strategy trait so tests can script draws
//! - The delay suspends the task; it never blocks the runtime thread
//! - Outcomes are classified with a strict `<` against the threshold

pub mod random;
pub mod work;

pub use random::{RandomSource, ScriptedSource, ThreadRngSource};
pub use work::{Category, WorkOutcome, WorkSimulator};
