//! JSON endpoints for the gateway

pub mod health;
pub mod locale;
pub mod session;

use axum::{routing::get, Router};
use crate::state::PortalState;
use std::sync::Arc;

/// Create all JSON routes
pub fn create_rest_routes() -> Router<Arc<PortalState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/locale", get(locale::current_locale))
        .route("/api/session", get(session::current_session))
}

pub use health::*;
pub use locale::*;
pub use session::*;
