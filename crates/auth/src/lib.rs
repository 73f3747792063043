//! Access gates and the session authority for the NEXGlab portal.
//!
//! Admission is a plain, case-sensitive suffix check on the submitted email.
//! There is no credential store: the admitted email itself is the session,
//! carried back by the client in a cookie and re-checked by [`Authenticator::authenticate`].

pub mod guard;

use std::fmt;
use std::str::FromStr;

use nexglab_config::AuthConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use guard::{GuardDecision, PathMatcher, ProtectedPaths};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("email must end with {suffix}")]
    InvalidEmail { suffix: String },
    #[error("unknown gate: {0}")]
    UnknownGate(String),
}

/// Check that `email` ends with `required_suffix`.
///
/// Nothing else about the address is inspected.
///
/// ```
/// use nexglab_auth::validate;
///
/// assert!(validate("a@enstp.edu.dz", "@enstp.edu.dz").is_ok());
/// assert!(validate("a@enstp.edu.dz.evil.com", "@enstp.edu.dz").is_err());
/// assert!(validate("a@ENSTP.EDU.DZ", "@enstp.edu.dz").is_err());
/// ```
pub fn validate(email: &str, required_suffix: &str) -> Result<(), AccessError> {
    if email.ends_with(required_suffix) {
        Ok(())
    } else {
        Err(AccessError::InvalidEmail {
            suffix: required_suffix.to_string(),
        })
    }
}

/// Entry points that accept an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Landing page, leads to university selection.
    General,
    /// ENSTP login, opens the lab funnel.
    Institutional,
    /// Legacy per-university login, leads to the dashboard.
    University,
}

impl Gate {
    pub const ALL: [Gate; 3] = [Gate::General, Gate::Institutional, Gate::University];

    pub const fn as_str(self) -> &'static str {
        match self {
            Gate::General => "general",
            Gate::Institutional => "institutional",
            Gate::University => "university",
        }
    }

    /// Whether admission through this gate opens a session.
    pub const fn persists_session(self) -> bool {
        matches!(self, Gate::Institutional)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gate {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|gate| gate.as_str() == value)
            .ok_or_else(|| AccessError::UnknownGate(value.to_string()))
    }
}

/// An email admitted through a gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    gate: Gate,
    email: String,
}

impl Credential {
    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// A request whose credential cookie passed the institutional check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Authenticator {
    config: AuthConfig,
    protected: ProtectedPaths,
}

impl Authenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            protected: ProtectedPaths::default(),
        }
    }

    pub fn with_protected_paths(mut self, protected: ProtectedPaths) -> Self {
        self.protected = protected;
        self
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn protected_paths(&self) -> &ProtectedPaths {
        &self.protected
    }

    pub fn suffix(&self, gate: Gate) -> &str {
        let gates = &self.config.gates;
        match gate {
            Gate::General => &gates.general.suffix,
            Gate::Institutional => &gates.institutional.suffix,
            Gate::University => &gates.university.suffix,
        }
    }

    /// Run the gate check and wrap the email on success.
    pub fn admit(&self, gate: Gate, email: &str) -> Result<Credential, AccessError> {
        validate(email, self.suffix(gate)).inspect_err(|_| {
            debug!(%gate, "gate rejected email");
        })?;

        Ok(Credential {
            gate,
            email: email.to_string(),
        })
    }

    /// The single authority deciding whether a stored credential is a session.
    pub fn authenticate(&self, stored_email: Option<&str>) -> Option<Session> {
        let email = stored_email.filter(|email| !email.is_empty())?;
        validate(email, self.suffix(Gate::Institutional)).ok()?;

        Some(Session {
            email: email.to_string(),
        })
    }

    /// Decide what to do with a request for `path`.
    pub fn guard(&self, path: &str, session: Option<&Session>) -> GuardDecision {
        self.protected
            .decide(path, session, &self.config.fallback_path)
    }

    pub fn fallback_path(&self) -> &str {
        &self.config.fallback_path
    }
}
