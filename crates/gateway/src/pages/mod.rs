//! Server-rendered portal pages

pub mod entry;
pub mod funnel;
pub mod labs;
pub mod language;
pub mod legacy;

use axum::{routing::get, routing::post, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::PortalState;

/// Body of every gate form.
#[derive(Debug, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email: String,
}

/// `?q=` search on listing pages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Create all page routes
pub fn create_page_routes() -> Router<Arc<PortalState>> {
    Router::new()
        // Entry gates
        .route("/", get(entry::landing).post(entry::submit_landing))
        .route("/enstp", get(entry::enstp_login).post(entry::submit_enstp_login))
        // Funnel
        .route("/select", get(funnel::select_university))
        .route("/enstp/cycles", get(funnel::cycles))
        .route("/enstp/ci", get(funnel::engineering_cycle))
        .route("/enstp/cp", get(funnel::preparatory_cycle))
        .route("/enstp/ci/dib", get(funnel::dib_department))
        .route("/enstp/ci/dib/:topic", get(funnel::topic))
        .route(crate::catalog::RMR_LAB_PAGE, get(labs::rmr_lab))
        // Legacy university flow
        .route("/universities", get(legacy::universities))
        .route(
            "/universities/:id",
            get(legacy::university_login).post(legacy::submit_university_login),
        )
        .route("/dashboard", get(legacy::dashboard))
        // Locale switcher
        .route("/language", post(language::switch_language))
}
