//! Session as seen by the route guard

use axum::{Extension, Json};
use nexglab_auth::Session;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    responses(
        (status = 200, description = "Whether the credential cookie holds a valid session", body = SessionResponse)
    )
)]
pub async fn current_session(session: Option<Extension<Session>>) -> Json<SessionResponse> {
    let email = session.map(|Extension(session)| session.email);
    Json(SessionResponse {
        authenticated: email.is_some(),
        email,
    })
}
