//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer wiring)
//!     → request.rs (request ID generation)
//!     → middleware.rs (classify + gate, apply decision)
//!     → [fronted application handlers]
//!     → Response with security headers
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::GateServer;
