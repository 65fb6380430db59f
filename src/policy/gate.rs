//! Access gate: policy class + session presence → decision.
//!
//! # Responsibilities
//! - Evaluate a request context against the compiled route table
//! - Produce the action (allow / redirect / reject) and the header set
//! - Keep the fail-open vs fail-closed choice an explicit config knob
//!
//! # Design Decisions
//! - The reference system ships fail-open: protected paths without a
//!   session are still allowed. That stays the configured default; the
//!   fail-closed variant redirects to the auth entry point with the
//!   original path in a `returnTo` query parameter, or rejects with 401
//! - Static paths bypass header injection entirely
//! - Session presence only; credential contents are never inspected

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::{PolicyConfig, RoutesConfig};
use crate::policy::classifier::{RouteClass, RouteTable};
use crate::policy::pattern::PatternError;
use crate::security::headers::baseline_headers;

/// What the gate does when authorization information is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailMode {
    /// Allow the request through (reference behavior).
    #[default]
    Open,
    /// Deny the request per [`DeniedAction`].
    Closed,
}

/// Shape of a fail-closed denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeniedAction {
    /// Redirect to the auth entry point, preserving the original path.
    #[default]
    Redirect,
    /// Reject with 401 Unauthorized.
    Reject,
}

/// Per-request facts the gate needs.
///
/// `has_session` records the presence of the named session cookie, not its
/// validity.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub has_session: bool,
}

/// The gate's verdict for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    Allow,
    Redirect(String),
    Reject(StatusCode),
}

impl GateAction {
    /// Stable label for logs and metric tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            GateAction::Allow => "allow",
            GateAction::Redirect(_) => "redirect",
            GateAction::Reject(_) => "reject",
        }
    }
}

/// Outcome of evaluating a [`RequestContext`].
///
/// `headers` preserves insertion order; it is empty exactly when the path
/// is classified Static.
#[derive(Debug, Clone)]
pub struct GateDecision {
    pub class: RouteClass,
    pub action: GateAction,
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

/// The access gate. Immutable after construction; safe to share via Arc
/// and invoke concurrently.
#[derive(Debug, Clone)]
pub struct Gate {
    table: RouteTable,
    fail_mode: FailMode,
    denied: DeniedAction,
    login_path: String,
}

impl Gate {
    /// Build a gate from validated configuration.
    pub fn new(routes: &RoutesConfig, policy: &PolicyConfig) -> Result<Self, PatternError> {
        Ok(Self {
            table: RouteTable::from_config(routes)?,
            fail_mode: policy.fail_mode,
            denied: policy.denied,
            login_path: policy.login_path.clone(),
        })
    }

    /// Evaluate a request. Pure and synchronous; never panics, never blocks.
    pub fn evaluate(&self, ctx: &RequestContext<'_>) -> GateDecision {
        let class = self.table.classify(ctx.path);

        // Static assets bypass header injection entirely.
        if class == RouteClass::Static {
            return GateDecision {
                class,
                action: GateAction::Allow,
                headers: Vec::new(),
            };
        }

        let headers = baseline_headers();

        let needs_session = match class {
            RouteClass::Protected => true,
            // Unmatched paths deny consistently in closed mode.
            RouteClass::Unclassified => self.fail_mode == FailMode::Closed,
            _ => false,
        };

        let action = if needs_session && !ctx.has_session {
            match self.fail_mode {
                FailMode::Open => GateAction::Allow,
                FailMode::Closed => match self.denied {
                    DeniedAction::Redirect => GateAction::Redirect(self.redirect_target(ctx.path)),
                    DeniedAction::Reject => GateAction::Reject(StatusCode::UNAUTHORIZED),
                },
            }
        } else {
            GateAction::Allow
        };

        GateDecision {
            class,
            action,
            headers,
        }
    }

    /// Auth entry point with the original path as `returnTo`.
    fn redirect_target(&self, path: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("returnTo", path)
            .finish();
        format!("{}?{}", self.login_path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> RoutesConfig {
        RoutesConfig {
            public: vec!["/login".into(), "/api/health".into()],
            auth: vec!["/api/auth*".into()],
            static_assets: vec!["/_next/static/".into()],
            protected: vec!["/dashboard".into()],
        }
    }

    fn gate(fail_mode: FailMode, denied: DeniedAction) -> Gate {
        Gate::new(
            &routes(),
            &PolicyConfig {
                fail_mode,
                denied,
                ..PolicyConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_static_bypass_has_no_headers() {
        let g = gate(FailMode::Open, DeniedAction::Redirect);
        let d = g.evaluate(&RequestContext {
            path: "/_next/static/chunk.js",
            has_session: false,
        });
        assert_eq!(d.class, RouteClass::Static);
        assert_eq!(d.action, GateAction::Allow);
        assert!(d.headers.is_empty());
    }

    #[test]
    fn test_public_path_carries_baseline_headers() {
        let g = gate(FailMode::Open, DeniedAction::Redirect);
        let d = g.evaluate(&RequestContext {
            path: "/api/health",
            has_session: false,
        });
        assert_eq!(d.action, GateAction::Allow);
        assert_eq!(d.headers.len(), 4);
        assert_eq!(d.headers[0].0.as_str(), "x-content-type-options");
    }

    #[test]
    fn test_fail_open_allows_anonymous_protected() {
        let g = gate(FailMode::Open, DeniedAction::Redirect);
        let d = g.evaluate(&RequestContext {
            path: "/dashboard",
            has_session: false,
        });
        assert_eq!(d.class, RouteClass::Protected);
        assert_eq!(d.action, GateAction::Allow);
        assert_eq!(d.headers.len(), 4);
    }

    #[test]
    fn test_fail_closed_redirects_with_return_path() {
        let g = gate(FailMode::Closed, DeniedAction::Redirect);
        let d = g.evaluate(&RequestContext {
            path: "/dashboard",
            has_session: false,
        });
        assert_eq!(
            d.action,
            GateAction::Redirect("/login?returnTo=%2Fdashboard".to_string())
        );
        // Baseline headers ride along on the redirect too.
        assert_eq!(d.headers.len(), 4);
    }

    #[test]
    fn test_fail_closed_reject_is_401() {
        let g = gate(FailMode::Closed, DeniedAction::Reject);
        let d = g.evaluate(&RequestContext {
            path: "/dashboard/today",
            has_session: false,
        });
        assert_eq!(d.action, GateAction::Reject(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_session_holder_passes_in_closed_mode() {
        let g = gate(FailMode::Closed, DeniedAction::Redirect);
        let d = g.evaluate(&RequestContext {
            path: "/dashboard",
            has_session: true,
        });
        assert_eq!(d.action, GateAction::Allow);
    }

    #[test]
    fn test_unclassified_follows_fail_mode() {
        let open = gate(FailMode::Open, DeniedAction::Reject);
        let d = open.evaluate(&RequestContext {
            path: "/unknown/path",
            has_session: false,
        });
        assert_eq!(d.class, RouteClass::Unclassified);
        assert_eq!(d.action, GateAction::Allow);

        let closed = gate(FailMode::Closed, DeniedAction::Reject);
        let d = closed.evaluate(&RequestContext {
            path: "/unknown/path",
            has_session: false,
        });
        assert_eq!(d.action, GateAction::Reject(StatusCode::UNAUTHORIZED));
    }
}
