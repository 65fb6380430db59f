//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup: load config → validate → build gate → bind listener → serve
//! Shutdown: SIGTERM/SIGINT → stop accepting → drain in-flight → exit
//! ```

pub mod signals;

pub use signals::shutdown_signal;
