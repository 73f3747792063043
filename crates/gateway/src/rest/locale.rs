//! Active locale of the calling client

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::extract::PageContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct LocaleResponse {
    /// `fr`, `en` or `ar`
    pub locale: String,
    /// `ltr` or `rtl`
    pub direction: String,
}

#[utoipa::path(
    get,
    path = "/api/locale",
    tag = "Locale",
    responses(
        (status = 200, description = "Locale resolved from the language cookie", body = LocaleResponse)
    )
)]
pub async fn current_locale(ctx: PageContext) -> Json<LocaleResponse> {
    let state = ctx.locale.get();
    Json(LocaleResponse {
        locale: state.locale.code().to_string(),
        direction: state.direction.as_str().to_string(),
    })
}
