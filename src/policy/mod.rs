//! Route classification and access gating.
//!
//! # Data Flow
//! ```text
//! Request path + session presence
//!     → pattern.rs (prefix/wildcard pattern matching)
//!     → classifier.rs (RouteTable: path → RouteClass)
//!     → gate.rs (RouteClass + session → GateDecision)
//!     → [HTTP adapter applies the decision]
//! ```
//!
//! # Design Decisions
//! - Pure, synchronous decision path: no I/O, no locks, no awaits
//! - Patterns compiled once at startup; RouteTable immutable thereafter
//! - Fail-open vs fail-closed is configuration, never a hardcoded branch

pub mod classifier;
pub mod gate;
pub mod pattern;

pub use classifier::{RouteClass, RouteTable};
pub use gate::{DeniedAction, FailMode, Gate, GateAction, GateDecision, RequestContext};
pub use pattern::{PatternError, RoutePattern};
