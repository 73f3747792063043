//! Cookie surface: the credential pair and the persisted locale.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use nexglab_auth::Credential;
use nexglab_config::AuthConfig;
use nexglab_locale::PreferenceStore;
use time::Duration;

/// The locale choice outlives the credential cookies.
const PREFERENCE_MAX_AGE_DAYS: i64 = 365;

fn site_cookie(name: String, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(max_age)
        .build()
}

/// Add the credential cookie and the auth flag cookie for an admitted email.
pub fn persist_credential(jar: CookieJar, config: &AuthConfig, credential: &Credential) -> CookieJar {
    let max_age = Duration::seconds(i64::try_from(config.cookie_max_age_seconds).unwrap_or(i64::MAX));
    jar.add(site_cookie(
        config.credential_cookie.clone(),
        credential.email().to_string(),
        max_age,
    ))
        .add(site_cookie(config.flag_cookie.clone(), "true".to_string(), max_age))
}

/// Value of the credential cookie, if any. The jar has already undone the
/// percent-encoding applied on the wire.
pub fn stored_credential(jar: &CookieJar, config: &AuthConfig) -> Option<String> {
    jar.get(&config.credential_cookie)
        .map(|cookie| cookie.value().to_string())
}

/// Cookie-backed preference storage for one request.
#[derive(Debug, Default)]
pub struct CookiePreferences {
    jar: CookieJar,
}

impl CookiePreferences {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Jar carrying any cookies written through [`PreferenceStore::save`].
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStore for CookiePreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn save(&mut self, key: &str, value: &str) {
        let cookie = site_cookie(
            key.to_string(),
            value.to_string(),
            Duration::days(PREFERENCE_MAX_AGE_DAYS),
        );
        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexglab_auth::{Authenticator, Gate};

    fn credential(email: &str) -> Credential {
        Authenticator::new(AuthConfig::default())
            .admit(Gate::Institutional, email)
            .expect("institutional address")
    }

    #[test]
    fn test_persist_credential_sets_both_cookies() {
        let config = AuthConfig::default();
        let jar = persist_credential(CookieJar::new(), &config, &credential("x@enstp.edu.dz"));

        let email = jar.get("emailENSTP").expect("credential cookie");
        assert_eq!(email.path(), Some("/"));
        assert_eq!(email.max_age(), Some(Duration::seconds(604_800)));

        let flag = jar.get("enstp_auth").expect("flag cookie");
        assert_eq!(flag.value(), "true");
        assert_eq!(flag.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn test_stored_credential_reads_admitted_email() {
        let config = AuthConfig::default();
        let jar = persist_credential(
            CookieJar::new(),
            &config,
            &credential("first last+tag@enstp.edu.dz"),
        );
        assert_eq!(
            stored_credential(&jar, &config).as_deref(),
            Some("first last+tag@enstp.edu.dz")
        );
    }

    #[test]
    fn test_cookie_preferences_save_and_load() {
        let mut prefs = CookiePreferences::default();
        assert_eq!(prefs.load("language"), None);

        prefs.save("language", "ar");
        assert_eq!(prefs.load("language").as_deref(), Some("ar"));

        let jar = prefs.into_jar();
        assert_eq!(jar.get("language").map(|c| c.path()), Some(Some("/")));
    }
}
