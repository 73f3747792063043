//! Shared application state for the gateway

use std::sync::Arc;

use nexglab_auth::Authenticator;
use nexglab_config::AppConfig;

/// Read-only state shared by every request
#[derive(Debug, Clone)]
pub struct PortalState {
    /// Loaded configuration
    pub config: AppConfig,
    /// Gate checks and the session authority
    pub authenticator: Authenticator,
}

impl PortalState {
    pub fn new(config: AppConfig) -> Self {
        let authenticator = Authenticator::new(config.auth.clone());
        Self {
            config,
            authenticator,
        }
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Build shared state with default configuration, for development and tests
pub fn create_portal_state() -> Arc<PortalState> {
    Arc::new(PortalState::new(AppConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_portal_state() {
        let state = create_portal_state();
        assert_eq!(state.authenticator().fallback_path(), "/enstp");
        assert_eq!(state.config().http.port, 3000);
    }
}
