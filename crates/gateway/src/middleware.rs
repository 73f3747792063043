//! Route guard and other cross-cutting concerns

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use nexglab_auth::GuardDecision;
use nexglab_config::SecurityConfig;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{debug, Level};

use crate::cookies;
use crate::error::{GatewayError, GatewayResult};
use crate::state::PortalState;

/// Resolve the session for every request and enforce the protected-path set.
///
/// The resolved [`nexglab_auth::Session`] is stored in the request extensions;
/// page handlers read it from there instead of re-checking cookies.
pub async fn route_guard(
    State(state): State<Arc<PortalState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let authenticator = state.authenticator();
    let stored = cookies::stored_credential(&jar, authenticator.config());
    let session = authenticator.authenticate(stored.as_deref());

    match authenticator.guard(request.uri().path(), session.as_ref()) {
        GuardDecision::Pass => {
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
        GuardDecision::Redirect(target) => {
            debug!(path = %request.uri().path(), %target, "route guard redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// Create tracing middleware
pub fn create_trace_middleware() -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
}

/// Logging middleware for request/response logging
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = std::time::Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        path = %path,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Header layers applied to every response: frame ancestors policy and the
/// cross-origin allowance.
pub fn security_headers(
    config: &SecurityConfig,
) -> GatewayResult<(SetResponseHeaderLayer<HeaderValue>, SetResponseHeaderLayer<HeaderValue>)> {
    let csp = HeaderValue::from_str(&config.content_security_policy())
        .map_err(|e| GatewayError::Configuration(format!("invalid frame_ancestors: {e}")))?;
    let origin = HeaderValue::from_str(&config.allow_origin)
        .map_err(|e| GatewayError::Configuration(format!("invalid allow_origin: {e}")))?;

    Ok((
        SetResponseHeaderLayer::overriding(header::CONTENT_SECURITY_POLICY, csp),
        SetResponseHeaderLayer::overriding(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin),
    ))
}
