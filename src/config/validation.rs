//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route patterns compile (non-empty, leading slash)
//! - Validate addresses and policy fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::GateConfig;
use crate::policy::pattern::{PatternError, RoutePattern};

/// A single semantic validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("routes.{list}: {source}")]
    InvalidPattern {
        list: &'static str,
        source: PatternError,
    },

    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address `{0}` is not a valid socket address")]
    InvalidMetricsAddress(String),

    #[error("policy.session_cookie must not be empty")]
    EmptySessionCookie,

    #[error("policy.login_path `{0}` must start with `/`")]
    InvalidLoginPath(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let lists: [(&'static str, &[String]); 4] = [
        ("public", &config.routes.public),
        ("auth", &config.routes.auth),
        ("static", &config.routes.static_assets),
        ("protected", &config.routes.protected),
    ];
    for (list, patterns) in lists {
        for raw in patterns {
            if let Err(source) = RoutePattern::parse(raw) {
                errors.push(ValidationError::InvalidPattern { list, source });
            }
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.policy.session_cookie.is_empty() {
        errors.push(ValidationError::EmptySessionCookie);
    }

    if !config.policy.login_path.starts_with('/') {
        errors.push(ValidationError::InvalidLoginPath(
            config.policy.login_path.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
