//! Route classification and access gating for a fronted web application.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 ROUTE GATE                    │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌────────────┐   ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ classifier │──▶│  gate   │  │
//!                    │  │ server  │   │ RouteClass │   │ decision│  │
//!                    │  └─────────┘   └────────────┘   └────┬────┘  │
//!                    │                                      │       │
//!                    │        Allow / Redirect / Reject     ▼       │
//!   Client Response  │  ┌──────────────────┐   ┌───────────────┐    │
//!   ◀────────────────┼──│ security headers │◀──│  middleware   │    │
//!                    │  └──────────────────┘   └───────────────┘    │
//!                    │                                               │
//!                    │  Cross-cutting: config · observability ·      │
//!                    │  lifecycle                                    │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Every inbound path is classified into one of five policy classes
//! (public, auth, static, protected, unclassified), then gated against the
//! presence of a session cookie. The decision path is pure and lock-free;
//! the HTTP adapter owns the side effects.

// Core subsystems
pub mod config;
pub mod http;
pub mod policy;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::GateConfig;
pub use http::GateServer;
pub use policy::{Gate, GateAction, GateDecision, RequestContext, RouteClass};
