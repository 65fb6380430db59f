//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the gate middleware in front
//! - Wire up middleware (tracing, request ID, timeout)
//! - Bind server to listener and serve with graceful shutdown
//!
//! # Design Decisions
//! - Gate middleware is the innermost layer: it sees the final path and
//!   its headers land on every routed response
//! - Handlers behind the gate are placeholders for the fronted
//!   application, which is not this crate's concern

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GateConfig;
use crate::http::middleware::{gate_middleware, GateState};
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::lifecycle::shutdown_signal;
use crate::policy::{Gate, PatternError};

/// HTTP server fronting an application with the access gate.
pub struct GateServer {
    router: Router,
    config: GateConfig,
}

impl GateServer {
    /// Create a new gate server from validated configuration.
    pub fn new(config: GateConfig) -> Result<Self, PatternError> {
        let gate = Arc::new(Gate::new(&config.routes, &config.policy)?);
        let state = GateState {
            gate,
            session_cookie: Arc::from(config.policy.session_cookie.as_str()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GateConfig, state: GateState) -> Router {
        Router::new()
            .route("/api/health", get(health_handler))
            .route("/", any(app_handler))
            .route("/{*path}", any(app_handler))
            .layer(axum_middleware::from_fn_with_state(state, gate_middleware))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.listener.request_timeout_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            fail_mode = ?self.config.policy.fail_mode,
            "Gate server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gate server stopped");
        Ok(())
    }

    /// The assembled router; used by integration tests to drive requests
    /// without binding a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}

/// Liveness endpoint, reachable without a session.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Stand-in for the fronted application's handlers.
async fn app_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
