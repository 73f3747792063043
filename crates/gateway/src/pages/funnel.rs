//! University selection down to the lab topics.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use nexglab_locale::Key;

use super::SearchQuery;
use crate::catalog::{self, Cycle, LabAccess, Topic, ENGINEERING_DEPARTMENTS};
use crate::error::{GatewayError, GatewayResult};
use crate::extract::{PageContext, RequireSession};
use crate::render::escape;
use crate::state::PortalState;

/// University list filtered by `?q=`. The only entry leads to the ENSTP gate.
pub async fn select_university(ctx: PageContext, Query(query): Query<SearchQuery>) -> Html<String> {
    let page = ctx.page();
    let locale = ctx.locale.locale();
    let matches = catalog::search_universities(&query.q, locale);

    let mut body = format!(
        "{back}<h1>{title}</h1>\
         <form class=\"search\" method=\"get\" action=\"/select\">\
         <input type=\"search\" name=\"q\" value=\"{q}\" placeholder=\"{placeholder}\">\
         <button type=\"submit\">{search}</button></form>",
        back = page.back_link("/"),
        title = page.t(Key::SelectUniversity),
        q = escape(&query.q),
        placeholder = page.t(Key::SearchUniversity),
        search = page.t(Key::Search),
    );

    if matches.is_empty() {
        body.push_str(&format!("<p class=\"empty\">{}</p>", page.t(Key::NoUniversityFound)));
    } else {
        body.push_str("<ul class=\"universities\">");
        for university in matches {
            body.push_str(&format!(
                "<li><a href=\"{href}\"><img src=\"{logo}\" alt=\"{name}\">\
                 <strong>{name}</strong><span>{full}</span></a></li>",
                href = university.entry,
                logo = university.logo,
                name = escape(university.name),
                full = page.t(university.full_name),
            ));
        }
        body.push_str("</ul>");
    }

    page.render(ctx.locale.text(Key::SelectUniversity), &body)
}

/// Cycle choice. Requires a session even though the guard set does not name it.
pub async fn cycles(RequireSession(session): RequireSession, ctx: PageContext) -> Html<String> {
    let page = ctx.page();
    let mut body = format!(
        "{back}<h1>{title}</h1><p class=\"student\">{student}: {email}</p><ul class=\"cycles\">",
        back = page.back_link("/enstp"),
        title = page.t(Key::SelectCycle),
        student = page.t(Key::Student),
        email = escape(&session.email),
    );
    for cycle in Cycle::ALL {
        body.push_str(&format!(
            "<li><a href=\"{href}\"><strong>{code}</strong><span>{title}</span><p>{description}</p></a></li>",
            href = cycle.path(),
            code = cycle.code(),
            title = page.t(cycle.title()),
            description = page.t(cycle.description()),
        ));
    }
    body.push_str("</ul>");

    page.render(ctx.locale.text(Key::SelectCycle), &body)
}

/// Engineering cycle: department list. Departments without a page show
/// their modules in place.
pub async fn engineering_cycle(ctx: PageContext) -> Html<String> {
    let page = ctx.page();
    let mut body = format!(
        "{back}<h1>{title}</h1><p>{description}</p><h2>{select}</h2><ul class=\"departments\">",
        back = page.back_link("/enstp/cycles"),
        title = page.t(Key::Ci),
        description = page.t(Key::CiDescription),
        select = page.t(Key::SelectDepartment),
    );

    for department in ENGINEERING_DEPARTMENTS {
        body.push_str("<li>");
        let heading = format!(
            "<strong>{}</strong> <span>{}</span><p>{}</p>",
            department.code,
            escape(department.name),
            escape(department.summary)
        );
        match department.path {
            Some(path) => {
                body.push_str(&format!("<a href=\"{path}\">{heading}</a>"));
            }
            None => {
                body.push_str(&format!(
                    "<details><summary>{heading}</summary><h3>{}</h3><ul class=\"modules\">",
                    page.t(Key::Modules)
                ));
                for module in department.modules {
                    body.push_str(&format!(
                        "<li>{} <small>{} sem.</small></li>",
                        escape(module.title),
                        module.weeks
                    ));
                }
                body.push_str("</ul></details>");
            }
        }
        body.push_str("</li>");
    }
    body.push_str("</ul>");

    page.render(ctx.locale.text(Key::Ci), &body)
}

pub async fn preparatory_cycle(ctx: PageContext) -> Html<String> {
    let page = ctx.page();
    let body = format!(
        "{back}<h1>{title}</h1><p>{description}</p><p class=\"notice\">{soon}</p>",
        back = page.back_link("/enstp/cycles"),
        title = page.t(Key::Cp),
        description = page.t(Key::CpDescription),
        soon = page.t(Key::ComingSoon),
    );
    page.render(ctx.locale.text(Key::Cp), &body)
}

/// DIB department: the three lab topics.
pub async fn dib_department(ctx: PageContext) -> Html<String> {
    let page = ctx.page();
    let mut body = format!(
        "{back}<h1>DIB</h1><h2>{topics}</h2><ul class=\"topics\">",
        back = page.back_link("/enstp/ci"),
        topics = page.t(Key::LabTopics),
    );
    for topic in catalog::DIB_TOPICS {
        body.push_str(&format!(
            "<li><a href=\"{href}\"><span class=\"icon\">{icon}</span><strong>{title}</strong><p>{summary}</p></a></li>",
            href = topic.path(),
            icon = topic.icon,
            title = escape(topic.title),
            summary = escape(topic.summary),
        ));
    }
    body.push_str("</ul>");

    page.render(ctx.locale.text(Key::LabTopics), &body)
}

fn lab_link(topic: &Topic, state: &PortalState, label: &str) -> String {
    match topic.lab.access {
        LabAccess::Embedded { page } => {
            format!("<a class=\"lab\" href=\"{page}\">{}</a>", escape(label))
        }
        LabAccess::NewTab => format!(
            "<a class=\"lab\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape(&topic.lab.url(&state.config.labs)),
            escape(label)
        ),
    }
}

/// Topic page with the card of its lab.
pub async fn topic(
    State(state): State<Arc<PortalState>>,
    ctx: PageContext,
    Path(slug): Path<String>,
) -> GatewayResult<Html<String>> {
    let topic = catalog::topic(&slug)
        .ok_or_else(|| GatewayError::NotFound(format!("unknown topic: {slug}")))?;
    let page = ctx.page();

    let body = format!(
        "{back}<h1><span class=\"icon\">{icon}</span> {title}</h1><p>{summary}</p>\
         <article class=\"lab-card\"><h2>{name}</h2><p>{description}</p>{link}</article>",
        back = page.back_link("/enstp/ci/dib"),
        icon = topic.icon,
        title = escape(topic.title),
        summary = escape(topic.summary),
        name = escape(topic.lab.name),
        description = escape(topic.lab.description),
        link = lab_link(topic, &state, ctx.locale.text(Key::OpenLab)),
    );

    Ok(page.render(topic.title, &body))
}
