//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gate middleware produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (decision counters, Prometheus endpoint)
//! ```
//!
//! # Design Decisions
//! - Structured logging with env-filter overrides
//! - Metrics are cheap (atomic increments) and labelled by route class
//!   and gate action
//! - Public and Auth classes stay distinct in labels even though both
//!   mean "no session required"

pub mod logging;
pub mod metrics;
