use anyhow::Context;
use nexglab_locale::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "nexglab.toml",
    "config/nexglab.toml",
    "crates/config/nexglab.toml",
];

/// Seven days, the lifetime of the credential cookies.
pub const DEFAULT_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 7;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub auth: AuthConfig,
    pub locale: LocaleConfig,
    pub security: SecurityConfig,
    pub labs: LabsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Domain suffix required by one entry gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    pub suffix: String,
}

impl GateConfig {
    fn with_suffix(suffix: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
        }
    }
}

/// The three entry gates and their suffixes.
///
/// The suffixes disagree with each other and are kept apart on purpose until
/// product settles on one rule; each gate only ever checks its own.
///
/// ```
/// use nexglab_config::GatesConfig;
///
/// let gates = GatesConfig::default();
/// assert_eq!(gates.general.suffix, "@NEXGlab.edu.dz");
/// assert_eq!(gates.institutional.suffix, "@enstp.edu.dz");
/// assert_eq!(gates.university.suffix, ".NEXGlap@enstp.edu.dz");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatesConfig {
    pub general: GateConfig,
    pub institutional: GateConfig,
    pub university: GateConfig,
}

impl Default for GatesConfig {
    fn default() -> Self {
        Self {
            general: GateConfig::with_suffix("@NEXGlab.edu.dz"),
            institutional: GateConfig::with_suffix("@enstp.edu.dz"),
            university: GateConfig::with_suffix(".NEXGlap@enstp.edu.dz"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub gates: GatesConfig,
    pub credential_cookie: String,
    pub flag_cookie: String,
    pub cookie_max_age_seconds: u64,
    pub fallback_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            gates: GatesConfig::default(),
            credential_cookie: "emailENSTP".to_string(),
            flag_cookie: "enstp_auth".to_string(),
            cookie_max_age_seconds: DEFAULT_COOKIE_MAX_AGE,
            fallback_path: "/enstp".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub default: Locale,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub frame_ancestors: Vec<String>,
    pub allow_origin: String,
}

impl SecurityConfig {
    /// Value of the `Content-Security-Policy` header sent with every response.
    ///
    /// ```
    /// use nexglab_config::SecurityConfig;
    ///
    /// assert_eq!(
    ///     SecurityConfig::default().content_security_policy(),
    ///     "frame-ancestors 'self' *.vusercontent.net *.vercel.app;"
    /// );
    /// ```
    pub fn content_security_policy(&self) -> String {
        format!("frame-ancestors {};", self.frame_ancestors.join(" "))
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            frame_ancestors: vec![
                "'self'".to_string(),
                "*.vusercontent.net".to_string(),
                "*.vercel.app".to_string(),
            ],
            allow_origin: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabsConfig {
    pub rmr_url: String,
    pub soils_url: String,
    pub geology_url: String,
    pub slow_load_after_ms: u64,
}

impl Default for LabsConfig {
    fn default() -> Self {
        Self {
            rmr_url: "https://kzmokm2p4jupj05bk8yx.lite.vusercontent.net/".to_string(),
            soils_url: "https://kzml3lqq20tt8qydujwx.lite.vusercontent.net/".to_string(),
            geology_url: "https://kzmfx1gvq9owohucaqu1.lite.vusercontent.net/".to_string(),
            slow_load_after_ms: 5_000,
        }
    }
}

/// Whether `path` is a same-site absolute path safe to send as a `Location`.
///
/// Only visible ASCII other than `\` is allowed, so the value is always a
/// valid header value and browsers cannot turn it into a `//host` reference.
///
/// ```
/// use nexglab_config::is_local_path;
///
/// assert!(is_local_path("/enstp/ci"));
/// assert!(!is_local_path("//evil.example"));
/// assert!(!is_local_path("/\t/evil.example"));
/// assert!(!is_local_path("enstp"));
/// ```
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && path.bytes().all(|b| b.is_ascii_graphic() && b != b'\\')
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use nexglab_config::load;
///
/// std::env::remove_var("NEXGLAB_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let max_age = i64::try_from(defaults.auth.cookie_max_age_seconds).unwrap_or(i64::MAX);

    let mut builder = config::Config::builder()
        .set_default("http.address", defaults.http.address.clone())
        .and_then(|b| b.set_default("http.port", i64::from(defaults.http.port)))
        .and_then(|b| b.set_default("auth.cookie_max_age_seconds", max_age))
        .and_then(|b| b.set_default("auth.fallback_path", defaults.auth.fallback_path.clone()))
        .and_then(|b| b.set_default("locale.default", defaults.locale.default.code()))
        .context("unable to register configuration defaults")?;

    let environment_overrides = config::Environment::with_prefix("NEXGLAB").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("NEXGLAB_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via NEXGLAB_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if !is_local_path(&config.auth.fallback_path) {
        anyhow::bail!(
            "invalid configuration: auth.fallback_path must be a local absolute path, got {:?}",
            config.auth.fallback_path
        );
    }

    debug!(?config, "loaded portal configuration");
    Ok(config)
}
