//! # NEXGlab Gateway Crate
//!
//! HTTP surface of the NEXGlab portal: the server-rendered pages of the
//! entry funnel, the route guard in front of them, and the response headers
//! that let the portal be framed by its allowed hosts.
//!
//! ## Architecture
//!
//! - **Pages**: entry gates, university/cycle/department funnel, lab wrappers
//! - **REST**: small JSON endpoints with OpenAPI documentation
//! - **Middleware**: route guard, logging, tracing, security headers
//! - **State**: configuration and the session authority shared by every request
//!
//! ## Usage
//!
//! ```no_run
//! use nexglab_config::AppConfig;
//! use nexglab_gateway::{create_router, PortalState};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_router(PortalState::new(AppConfig::default()))?;
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cookies;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod pages;
pub mod render;
pub mod rest;
pub mod state;

// Re-export main types for convenience
pub use error::{GatewayError, GatewayResult};
pub use middleware::route_guard;
pub use state::{create_portal_state, PortalState};

use axum::{middleware as axum_middleware, Router};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;
use std::sync::Arc;

async fn not_found(uri: axum::http::Uri) -> GatewayError {
    GatewayError::NotFound(uri.path().to_string())
}

/// Create the main application router with all routes
pub fn create_router(state: PortalState) -> GatewayResult<Router> {
    let (csp, allow_origin) = middleware::security_headers(&state.config.security)?;
    let arc_state = Arc::new(state);

    #[allow(unused_mut)]
    let mut router = Router::new()
        .merge(pages::create_page_routes())
        .merge(rest::create_rest_routes())
        .fallback(not_found)
        // Every request passes the guard before reaching a handler
        .layer(axum_middleware::from_fn_with_state(
            arc_state.clone(),
            middleware::route_guard,
        ))
        .with_state(arc_state)
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(middleware::create_trace_middleware());

    // Add Swagger UI if in debug mode
    #[cfg(debug_assertions)]
    {
        #[derive(OpenApi)]
        #[openapi(
            paths(
                rest::health::health_check,
                rest::locale::current_locale,
                rest::session::current_session,
            ),
            components(
                schemas(
                    rest::health::HealthResponse,
                    rest::locale::LocaleResponse,
                    rest::session::SessionResponse,
                )
            ),
            tags(
                (name = "Health", description = "Liveness"),
                (name = "Locale", description = "Active locale"),
                (name = "Session", description = "Session resolved by the route guard"),
            )
        )]
        struct ApiDoc;

        router = router
            .merge(SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
            );
    }

    // Outermost, so redirects and errors carry the headers too
    Ok(router.layer(csp).layer(allow_origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexglab_config::AppConfig;

    #[test]
    fn test_router_builds_with_defaults() {
        assert!(create_router(PortalState::new(AppConfig::default())).is_ok());
    }

    #[test]
    fn test_router_rejects_unusable_header_values() {
        let mut config = AppConfig::default();
        config.security.allow_origin = "bad\r\nvalue".to_string();
        assert!(matches!(
            create_router(PortalState::new(config)),
            Err(GatewayError::Configuration(_))
        ));
    }
}
