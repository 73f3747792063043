//! Request extractors for page handlers.
//!
//! Both read what the route guard already resolved; neither looks at the
//! credential cookie itself.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::CookieJar;
use nexglab_auth::Session;
use nexglab_locale::LocaleStore;

use crate::cookies::CookiePreferences;
use crate::render::Page;
use crate::state::PortalState;

/// Locale and session of the client making the request.
pub struct PageContext {
    pub locale: LocaleStore<CookiePreferences>,
    pub session: Option<Session>,
    pub path: String,
}

impl PageContext {
    pub fn page(&self) -> Page<'_, CookiePreferences> {
        Page::new(&self.locale, &self.path)
    }
}

#[async_trait]
impl FromRequestParts<Arc<PortalState>> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<PortalState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let locale = LocaleStore::init(CookiePreferences::new(jar), state.config.locale.default);

        Ok(Self {
            locale,
            session: parts.extensions.get::<Session>().cloned(),
            path: parts.uri.path().to_string(),
        })
    }
}

/// A session the route guard validated for this request.
///
/// Rejects with a redirect to the fallback entry page when there is none.
pub struct RequireSession(pub Session);

#[async_trait]
impl FromRequestParts<Arc<PortalState>> for RequireSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<PortalState>,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(RequireSession)
            .ok_or_else(|| Redirect::temporary(state.authenticator().fallback_path()))
    }
}
