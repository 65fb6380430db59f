//! Route pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse configured pattern strings into compiled patterns
//! - Match request paths with prefix/wildcard semantics
//! - Reject malformed patterns at startup, not per-request
//!
//! # Design Decisions
//! - Three spellings, two match modes: `/admin*` and `/static/` are prefix
//!   matches; `/dashboard` matches exactly or as a parent segment
//! - No regex to guarantee O(n) matching

use thiserror::Error;

/// Error for malformed route patterns. Raised at table construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern must not be empty")]
    Empty,

    #[error("route pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
}

/// A compiled route pattern.
///
/// `is_wildcard` is true when the source pattern ended with `*` (stripped)
/// or with a trailing `/` (kept); both mean plain prefix matching. Otherwise
/// the pattern matches its path exactly, or any sub-path below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    prefix: String,
    is_wildcard: bool,
}

impl RoutePattern {
    /// Parse a pattern from its configured string form.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        if let Some(prefix) = raw.strip_suffix('*') {
            if prefix.is_empty() {
                return Err(PatternError::MissingLeadingSlash(raw.to_string()));
            }
            return Ok(Self {
                prefix: prefix.to_string(),
                is_wildcard: true,
            });
        }

        Ok(Self {
            is_wildcard: raw.ends_with('/'),
            prefix: raw.to_string(),
        })
    }

    /// Match a normalized request path against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        if self.is_wildcard {
            return path.starts_with(&self.prefix);
        }

        // Exact match, or the pattern as a parent segment: `/dashboard`
        // matches `/dashboard` and `/dashboard/today` but not `/dashboard2`.
        if path == self.prefix {
            return true;
        }
        path.len() > self.prefix.len()
            && path.starts_with(&self.prefix)
            && path.as_bytes()[self.prefix.len()] == b'/'
    }

    /// The literal prefix this pattern compares against.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether this pattern does plain prefix matching.
    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern_boundary() {
        let pat = RoutePattern::parse("/dashboard").unwrap();
        assert!(pat.matches("/dashboard"));
        assert!(pat.matches("/dashboard/today"));
        assert!(!pat.matches("/dashboard2"));
        assert!(!pat.matches("/dash"));
    }

    #[test]
    fn test_wildcard_pattern() {
        let pat = RoutePattern::parse("/admin*").unwrap();
        assert!(pat.is_wildcard());
        assert_eq!(pat.prefix(), "/admin");
        assert!(pat.matches("/adminpanel"));
        assert!(pat.matches("/admin/x"));
        assert!(!pat.matches("/api/admin"));
    }

    #[test]
    fn test_trailing_slash_is_prefix_match() {
        let pat = RoutePattern::parse("/_next/static/").unwrap();
        assert!(pat.is_wildcard());
        assert!(pat.matches("/_next/static/chunk.js"));
        assert!(!pat.matches("/_next/statics"));
    }

    #[test]
    fn test_malformed_patterns_rejected() {
        assert_eq!(RoutePattern::parse(""), Err(PatternError::Empty));
        assert!(matches!(
            RoutePattern::parse("dashboard"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            RoutePattern::parse("*"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
    }
}
