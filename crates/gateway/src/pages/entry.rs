//! Landing gate and ENSTP login gate

use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use nexglab_auth::Gate;
use nexglab_locale::Key;
use tracing::info;

use super::EmailForm;
use crate::cookies;
use crate::extract::PageContext;
use crate::render::email_form;
use crate::state::PortalState;

fn landing_page(ctx: &PageContext, value: &str, error: Option<&str>) -> String {
    let page = ctx.page();
    let body = format!(
        "<section class=\"welcome\"><h1>{}</h1></section>{}",
        page.t(Key::Welcome),
        email_form(
            "/",
            ctx.locale.text(Key::Email),
            ctx.locale.text(Key::EmailPlaceholder),
            ctx.locale.text(Key::Access),
            value,
            error,
        )
    );
    page.render(ctx.locale.text(Key::Welcome), &body).0
}

fn enstp_page(ctx: &PageContext, value: &str, error: Option<&str>) -> String {
    let page = ctx.page();
    let body = format!(
        "{back}<section class=\"welcome\"><img src=\"/images/enstp-logo.png\" alt=\"ENSTP\">\
         <h1>{welcome}</h1><p>{connect}</p></section>{form}",
        back = page.back_link("/select"),
        welcome = page.t(Key::EnstpWelcome),
        connect = page.t(Key::EnstpConnect),
        form = email_form(
            "/enstp",
            ctx.locale.text(Key::Email),
            ctx.locale.text(Key::EnstpEmailPlaceholder),
            ctx.locale.text(Key::Login),
            value,
            error,
        )
    );
    page.render(ctx.locale.text(Key::Enstp), &body).0
}

fn rejected(html: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, axum::response::Html(html)).into_response()
}

pub async fn landing(ctx: PageContext) -> impl IntoResponse {
    axum::response::Html(landing_page(&ctx, "", None))
}

/// General gate. Admission only moves the visitor on; nothing is stored.
pub async fn submit_landing(
    State(state): State<Arc<PortalState>>,
    ctx: PageContext,
    Form(form): Form<EmailForm>,
) -> Response {
    match state.authenticator().admit(Gate::General, &form.email) {
        Ok(_) => Redirect::to("/select").into_response(),
        Err(_) => rejected(landing_page(
            &ctx,
            &form.email,
            Some(ctx.locale.text(Key::InvalidEmail)),
        )),
    }
}

pub async fn enstp_login(ctx: PageContext) -> impl IntoResponse {
    axum::response::Html(enstp_page(&ctx, "", None))
}

/// Institutional gate. Admission writes the credential cookies and opens the funnel.
pub async fn submit_enstp_login(
    State(state): State<Arc<PortalState>>,
    ctx: PageContext,
    jar: CookieJar,
    Form(form): Form<EmailForm>,
) -> Response {
    let authenticator = state.authenticator();
    match authenticator.admit(Gate::Institutional, &form.email) {
        Ok(credential) => {
            info!("institutional login accepted");
            let jar = cookies::persist_credential(jar, authenticator.config(), &credential);
            (jar, Redirect::to("/enstp/cycles")).into_response()
        }
        Err(_) => rejected(enstp_page(
            &ctx,
            &form.email,
            Some(ctx.locale.text(Key::InvalidEnstpEmail)),
        )),
    }
}
