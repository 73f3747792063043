//! Language switcher target.

use axum::{
    extract::Form,
    response::{IntoResponse, Redirect},
};
use nexglab_config::is_local_path;
use nexglab_locale::Locale;
use serde::Deserialize;
use tracing::debug;

use crate::error::GatewayResult;
use crate::extract::PageContext;

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Local path to return to. Anything that could leave the site, or could
/// not be sent as a `Location` header, becomes `/`.
pub fn return_path(redirect: Option<&str>) -> &str {
    match redirect {
        Some(path) if is_local_path(path) => path,
        _ => "/",
    }
}

/// Switch the active locale, persist it, and go back to the page it was chosen on.
pub async fn switch_language(
    mut ctx: PageContext,
    Form(form): Form<LanguageForm>,
) -> GatewayResult<impl IntoResponse> {
    let locale: Locale = form.language.parse()?;
    ctx.locale.set(locale);
    debug!(%locale, "locale switched");

    let target = return_path(form.redirect.as_deref()).to_string();
    let jar = ctx.locale.into_preferences().into_jar();
    Ok((jar, Redirect::to(&target)))
}
