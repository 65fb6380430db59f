//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Gate decision (non-static):
//!     → headers.rs (baseline security response headers)
//!     → Attached to the outgoing response by the HTTP adapter
//! ```
//!
//! # Design Decisions
//! - One fixed baseline set for every non-static response
//! - Static assets skip injection entirely (hot path, no policy value)

pub mod headers;

pub use headers::baseline_headers;
