//! Gate middleware.
//!
//! Classifies every inbound request path, evaluates the access gate, and
//! applies the decision before the request reaches the fronted handlers.
//!
//! # Design Decisions
//! - The decision path is pure; this layer owns the only side effects
//!   (header injection, redirect/reject responses)
//! - No fault propagates past this boundary: anything that fails while
//!   applying a decision degrades to a bare 500 with no detail leaked

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::observability::metrics;
use crate::policy::{Gate, GateAction, GateDecision, RequestContext};

/// State required by the gate middleware.
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<Gate>,
    pub session_cookie: Arc<str>,
}

pub async fn gate_middleware(
    State(state): State<GateState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let has_session = has_session_cookie(req.headers(), &state.session_cookie);

    let decision = state.gate.evaluate(&RequestContext {
        path: &path,
        has_session,
    });

    tracing::debug!(
        path = %path,
        class = decision.class.as_str(),
        action = decision.action.as_str(),
        has_session,
        "Gate decision"
    );
    metrics::record_decision(decision.class.as_str(), decision.action.as_str());

    match decision.action {
        GateAction::Allow => {
            let mut response = next.run(req).await;
            apply_headers(&mut response, &decision);
            response
        }
        GateAction::Redirect(ref target) => match redirect_response(target, &decision) {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(target, error = %err, "Failed to build redirect response");
                failsafe_response()
            }
        },
        GateAction::Reject(status) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = status;
            apply_headers(&mut response, &decision);
            response
        }
    }
}

/// Presence check for the named session cookie. Contents are never read.
fn has_session_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|pair| {
            let pair = pair.trim_start();
            pair.strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('='))
        })
}

fn apply_headers(response: &mut Response, decision: &GateDecision) {
    for (name, value) in &decision.headers {
        response.headers_mut().insert(name.clone(), value.clone());
    }
}

fn redirect_response(
    target: &str,
    decision: &GateDecision,
) -> Result<Response, axum::http::header::InvalidHeaderValue> {
    let location = HeaderValue::from_str(target)?;
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::TEMPORARY_REDIRECT;
    response.headers_mut().insert(header::LOCATION, location);
    apply_headers(&mut response, decision);
    Ok(response)
}

/// Safe default when applying a decision fails. No detail leaked.
fn failsafe_response() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_cookie_presence() {
        let headers = headers_with_cookie("theme=dark; session=abc123");
        assert!(has_session_cookie(&headers, "session"));
        assert!(!has_session_cookie(&headers, "sid"));
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        let headers = headers_with_cookie("session_hint=1");
        assert!(!has_session_cookie(&headers, "session"));
    }

    #[test]
    fn test_empty_cookie_value_still_counts_as_present() {
        // Presence only; an empty value is not this layer's concern.
        let headers = headers_with_cookie("session=");
        assert!(has_session_cookie(&headers, "session"));
    }

    #[test]
    fn test_no_cookie_header() {
        assert!(!has_session_cookie(&HeaderMap::new(), "session"));
    }
}
