//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gate
//! server. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

use crate::policy::{DeniedAction, FailMode};

/// Root configuration for the gate server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Route pattern lists, one per policy class.
    pub routes: RoutesConfig,

    /// Gating policy (fail mode, session cookie, auth entry point).
    pub policy: PolicyConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// The four ordered route pattern lists.
///
/// Patterns use trailing `*` or trailing `/` for prefix matching; any other
/// pattern matches its path exactly or as a parent segment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Publicly reachable routes; no session needed.
    pub public: Vec<String>,

    /// Authentication entry points; no session needed, tracked separately.
    pub auth: Vec<String>,

    /// Static asset routes; bypass header injection.
    #[serde(rename = "static")]
    pub static_assets: Vec<String>,

    /// Routes requiring a session indicator.
    pub protected: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public: vec!["/login".to_string(), "/api/health".to_string()],
            auth: vec!["/api/auth*".to_string()],
            static_assets: vec![
                "/_next/static/".to_string(),
                "/favicon.ico".to_string(),
                "/images/".to_string(),
            ],
            protected: vec![
                "/dashboard".to_string(),
                "/menu".to_string(),
                "/orders".to_string(),
                "/reservations".to_string(),
                "/analytics".to_string(),
                "/settings".to_string(),
            ],
        }
    }
}

/// Gating policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Fail-open (reference behavior) or fail-closed.
    pub fail_mode: FailMode,

    /// Denial shape in fail-closed mode.
    pub denied: DeniedAction,

    /// Name of the session cookie checked for presence only.
    pub session_cookie: String,

    /// Auth entry point used as the redirect target when denied.
    pub login_path: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            fail_mode: FailMode::Open,
            denied: DeniedAction::Redirect,
            session_cookie: "session".to_string(),
            login_path: "/login".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
