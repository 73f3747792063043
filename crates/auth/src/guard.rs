//! Protected-path matching for the route guard.

use crate::Session;

/// One entry of the protected-path set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatcher {
    /// The path itself or anything below it, on segment boundaries.
    Prefix(&'static str),
    /// Any path containing the fragment.
    Contains(&'static str),
}

impl PathMatcher {
    pub fn matches(&self, path: &str) -> bool {
        match *self {
            PathMatcher::Prefix(prefix) => path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            PathMatcher::Contains(fragment) => path.contains(fragment),
        }
    }
}

impl std::fmt::Display for PathMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathMatcher::Prefix(prefix) => write!(f, "{prefix}/*"),
            PathMatcher::Contains(fragment) => write!(f, "*{fragment}*"),
        }
    }
}

const DEFAULT_MATCHERS: &[PathMatcher] = &[
    PathMatcher::Prefix("/enstp/ci"),
    PathMatcher::Prefix("/enstp/cp"),
    PathMatcher::Contains("/mecanique-sols"),
    PathMatcher::Contains("/mecanique-roches"),
    PathMatcher::Contains("/tp-geologie"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    Redirect(String),
}

/// Static set of path patterns that require a session.
#[derive(Debug, Clone)]
pub struct ProtectedPaths {
    matchers: Vec<PathMatcher>,
}

impl Default for ProtectedPaths {
    fn default() -> Self {
        Self::new(DEFAULT_MATCHERS.to_vec())
    }
}

impl ProtectedPaths {
    pub fn new(matchers: Vec<PathMatcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[PathMatcher] {
        &self.matchers
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(path))
    }

    pub fn decide(&self, path: &str, session: Option<&Session>, fallback: &str) -> GuardDecision {
        if !self.is_protected(path) || session.is_some() {
            GuardDecision::Pass
        } else {
            GuardDecision::Redirect(fallback.to_string())
        }
    }
}
