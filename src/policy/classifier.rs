//! Route classification.
//!
//! # Responsibilities
//! - Hold the four compiled pattern lists (static, public, auth, protected)
//! - Classify a request path into a policy class
//!
//! # Design Decisions
//! - Fixed precedence, first match wins: Static > Public > Auth > Protected
//! - Linear scan; pattern counts are small and fixed at startup
//! - Immutable after construction (thread-safe without locks)
//! - Public and Auth both mean "no session required" but stay distinct
//!   for logging and metrics

use crate::config::RoutesConfig;
use crate::policy::pattern::{PatternError, RoutePattern};

/// Policy class of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Publicly reachable page or API route.
    Public,
    /// Authentication entry points (login, token exchange).
    Auth,
    /// Static assets; bypass header injection entirely.
    Static,
    /// Requires a session indicator.
    Protected,
    /// Matched no configured pattern.
    Unclassified,
}

impl RouteClass {
    /// Stable label for logs and metric tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteClass::Public => "public",
            RouteClass::Auth => "auth",
            RouteClass::Static => "static",
            RouteClass::Protected => "protected",
            RouteClass::Unclassified => "unclassified",
        }
    }
}

/// Compiled route table, built once from configuration.
#[derive(Debug, Clone)]
pub struct RouteTable {
    static_assets: Vec<RoutePattern>,
    public: Vec<RoutePattern>,
    auth: Vec<RoutePattern>,
    protected: Vec<RoutePattern>,
}

impl RouteTable {
    /// Compile the configured pattern lists.
    ///
    /// Fails on the first malformed pattern; config validation reports the
    /// complete list of offenders before this is ever reached.
    pub fn from_config(routes: &RoutesConfig) -> Result<Self, PatternError> {
        Ok(Self {
            static_assets: compile(&routes.static_assets)?,
            public: compile(&routes.public)?,
            auth: compile(&routes.auth)?,
            protected: compile(&routes.protected)?,
        })
    }

    /// Classify a normalized request path.
    ///
    /// Pure function of the path and the table; deterministic and
    /// side-effect-free.
    pub fn classify(&self, path: &str) -> RouteClass {
        if matches_any(&self.static_assets, path) {
            return RouteClass::Static;
        }
        if matches_any(&self.public, path) {
            return RouteClass::Public;
        }
        if matches_any(&self.auth, path) {
            return RouteClass::Auth;
        }
        if matches_any(&self.protected, path) {
            return RouteClass::Protected;
        }
        RouteClass::Unclassified
    }
}

fn compile(raw: &[String]) -> Result<Vec<RoutePattern>, PatternError> {
    raw.iter().map(|p| RoutePattern::parse(p)).collect()
}

fn matches_any(patterns: &[RoutePattern], path: &str) -> bool {
    patterns.iter().any(|p| p.matches(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_config(&RoutesConfig {
            public: vec!["/login".into(), "/api/health".into()],
            auth: vec!["/api/auth*".into()],
            static_assets: vec!["/_next/static/".into(), "/favicon.ico".into()],
            protected: vec!["/dashboard".into(), "/orders".into()],
        })
        .unwrap()
    }

    #[test]
    fn test_classify_each_class() {
        let t = table();
        assert_eq!(t.classify("/api/health"), RouteClass::Public);
        assert_eq!(t.classify("/api/auth/callback"), RouteClass::Auth);
        assert_eq!(t.classify("/_next/static/chunk.js"), RouteClass::Static);
        assert_eq!(t.classify("/dashboard/today"), RouteClass::Protected);
        assert_eq!(t.classify("/unknown/path"), RouteClass::Unclassified);
    }

    #[test]
    fn test_static_precedence_over_protected() {
        let t = RouteTable::from_config(&RoutesConfig {
            public: vec![],
            auth: vec![],
            static_assets: vec!["/dashboard/assets/".into()],
            protected: vec!["/dashboard".into()],
        })
        .unwrap();
        // Matches both lists; Static wins.
        assert_eq!(t.classify("/dashboard/assets/app.js"), RouteClass::Static);
        assert_eq!(t.classify("/dashboard"), RouteClass::Protected);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let t = table();
        assert_eq!(t.classify("/orders/42"), t.classify("/orders/42"));
    }

    #[test]
    fn test_malformed_config_rejected() {
        let err = RouteTable::from_config(&RoutesConfig {
            public: vec![String::new()],
            auth: vec![],
            static_assets: vec![],
            protected: vec![],
        });
        assert!(matches!(err, Err(PatternError::Empty)));
    }
}
