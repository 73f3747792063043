//! Older university listing, university gate and dashboard.
//!
//! None of these pages read or write the session.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use nexglab_auth::Gate;
use nexglab_locale::Key;

use super::{EmailForm, SearchQuery};
use crate::catalog::{self, University, ENGINEERING_DEPARTMENTS};
use crate::extract::PageContext;
use crate::render::{email_form, escape};
use crate::state::PortalState;

pub async fn universities(ctx: PageContext, Query(query): Query<SearchQuery>) -> Html<String> {
    let page = ctx.page();
    let matches = catalog::search_universities(&query.q, ctx.locale.locale());

    let mut body = format!(
        "{back}<h1>{title}</h1>\
         <form class=\"search\" method=\"get\" action=\"/universities\">\
         <input type=\"search\" name=\"q\" value=\"{q}\" placeholder=\"{placeholder}\"></form>",
        back = page.back_link("/"),
        title = page.t(Key::SelectUniversity),
        q = escape(&query.q),
        placeholder = page.t(Key::SearchUniversity),
    );
    if matches.is_empty() {
        body.push_str(&format!("<p class=\"empty\">{}</p>", page.t(Key::NoUniversityFound)));
    }
    body.push_str("<ul class=\"universities\">");
    for university in matches {
        body.push_str(&format!(
            "<li><a href=\"/universities/{id}\"><strong>{name}</strong><span>{full}</span></a></li>",
            id = university.id,
            name = escape(university.name),
            full = page.t(university.full_name),
        ));
    }
    body.push_str("</ul>");

    page.render(ctx.locale.text(Key::SelectUniversity), &body)
}

fn university_page(
    ctx: &PageContext,
    university: &University,
    value: &str,
    error: Option<&str>,
) -> Html<String> {
    let page = ctx.page();
    let action = format!("/universities/{}", university.id);
    let body = format!(
        "{back}<h1>{name}</h1><p>{full}</p>{form}",
        back = page.back_link("/universities"),
        name = escape(university.name),
        full = page.t(university.full_name),
        form = email_form(
            &action,
            ctx.locale.text(Key::Email),
            ctx.locale.text(Key::UniversityEmailPlaceholder),
            ctx.locale.text(Key::Login),
            value,
            error,
        ),
    );
    page.render(university.name, &body)
}

/// Unknown universities send the visitor back to the list.
pub async fn university_login(ctx: PageContext, Path(id): Path<String>) -> Response {
    match catalog::university(&id) {
        Some(university) => university_page(&ctx, university, "", None).into_response(),
        None => Redirect::to("/universities").into_response(),
    }
}

pub async fn submit_university_login(
    State(state): State<Arc<PortalState>>,
    ctx: PageContext,
    Path(id): Path<String>,
    Form(form): Form<EmailForm>,
) -> Response {
    let Some(university) = catalog::university(&id) else {
        return Redirect::to("/universities").into_response();
    };

    match state.authenticator().admit(Gate::University, &form.email) {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            university_page(
                &ctx,
                university,
                &form.email,
                Some(ctx.locale.text(Key::InvalidUniversityEmail)),
            ),
        )
            .into_response(),
    }
}

/// Static student dashboard with placeholder figures.
pub async fn dashboard(ctx: PageContext) -> Html<String> {
    let page = ctx.page();
    let stats = [
        (Key::Modules, "5"),
        (Key::CompletedLabs, "0"),
        (Key::NextSession, "2j"),
    ];

    let mut body = format!(
        "<nav class=\"sidebar\"><a href=\"/dashboard\">{dashboard}</a><a href=\"#\">{profile}</a>\
         <a href=\"/enstp/cp\">{cp}</a><a href=\"/enstp/ci\">{ci}</a><a href=\"/\">{logout}</a></nav>\
         <h1>{dashboard}</h1><p>{student}</p><ul class=\"stats\">",
        dashboard = page.t(Key::Dashboard),
        profile = page.t(Key::Profile),
        cp = page.t(Key::Cp),
        ci = page.t(Key::Ci),
        logout = page.t(Key::Logout),
        student = page.t(Key::Student),
    );
    for (key, value) in stats {
        body.push_str(&format!("<li><span>{}</span><strong>{value}</strong></li>", page.t(key)));
    }
    body.push_str("</ul>");

    body.push_str(&format!(
        "<section><h2>{cp}</h2><p>{cp_description}</p></section><section><h2>{ci}</h2>",
        cp = page.t(Key::Cp),
        cp_description = page.t(Key::CpDescription),
        ci = page.t(Key::Ci),
    ));
    for (department, heading) in ENGINEERING_DEPARTMENTS
        .iter()
        .zip([Key::EngineeringData, Key::ModelingData])
    {
        body.push_str(&format!(
            "<h3>{} - {}</h3><ul class=\"modules\">",
            page.t(heading),
            department.code
        ));
        for module in department.modules {
            body.push_str(&format!("<li>{}</li>", escape(module.title)));
        }
        body.push_str("</ul>");
    }
    body.push_str("</section>");

    page.render(ctx.locale.text(Key::Dashboard), &body)
}
