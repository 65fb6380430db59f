//! Baseline security response headers.
//!
//! # Responsibilities
//! - Define the fixed header set attached to every non-static response
//!
//! # Design Decisions
//! - Values are static; construction is infallible (`from_static`)
//! - Insertion order is part of the contract and preserved by the caller

use axum::http::header::{
    HeaderName, HeaderValue, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
    X_XSS_PROTECTION,
};

/// The baseline security header set, in a fixed order.
pub fn baseline_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
        (
            REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_set_and_order() {
        let headers = baseline_headers();
        let names: Vec<&str> = headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            [
                "x-content-type-options",
                "x-frame-options",
                "x-xss-protection",
                "referrer-policy",
            ]
        );
        assert_eq!(headers[1].1, HeaderValue::from_static("DENY"));
    }
}
