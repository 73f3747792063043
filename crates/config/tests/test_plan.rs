//! Tests for the `nexglab-config` loader: defaults, file discovery,
//! environment overrides, and validation.

use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use nexglab_config::{is_local_path, load, AppConfig, AuthConfig, HttpConfig, LabsConfig, SecurityConfig};
use nexglab_locale::Locale;

const ENV_VARS_TO_RESET: &[&str] = &[
    "NEXGLAB_CONFIG",
    "NEXGLAB__HTTP__ADDRESS",
    "NEXGLAB__HTTP__PORT",
    "NEXGLAB__AUTH__COOKIE_MAX_AGE_SECONDS",
    "NEXGLAB__AUTH__FALLBACK_PATH",
    "NEXGLAB__AUTH__GATES__GENERAL__SUFFIX",
    "NEXGLAB__AUTH__GATES__INSTITUTIONAL__SUFFIX",
    "NEXGLAB__LOCALE__DEFAULT",
    "NEXGLAB__LABS__SLOW_LOAD_AFTER_MS",
];

struct TestContext {
    vars: Vec<(String, Option<String>)>,
    original_dir: Option<PathBuf>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            vars: Vec::new(),
            original_dir: None,
        }
    }

    fn reset_environment(&mut self) {
        for key in ENV_VARS_TO_RESET {
            self.remove_var(key);
        }
    }

    fn set_var(&mut self, key: &str, value: impl AsRef<str>) {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value.as_ref());
        self.vars.push((key.to_string(), previous));
    }

    fn remove_var(&mut self, key: &str) {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        self.vars.push((key.to_string(), previous));
    }

    fn set_current_dir(&mut self, dir: &Path) {
        if self.original_dir.is_none() {
            self.original_dir =
                Some(std::env::current_dir().expect("failed to capture current directory"));
        }
        std::env::set_current_dir(dir).expect("failed to set current directory");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(original) = self.original_dir.take() {
            let _ = std::env::set_current_dir(original);
        }

        while let Some((key, value)) = self.vars.pop() {
            match value {
                Some(val) => std::env::set_var(&key, val),
                None => std::env::remove_var(&key),
            }
        }
    }
}

fn write_config_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create config directories");
    }
    fs::write(&path, contents).expect("failed to write config file");
    path
}

fn isolated() -> (TempDir, TestContext) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());
    (temp_dir, ctx)
}

#[test]
#[serial]
fn load_uses_default_values_when_no_files_found() {
    let (_temp_dir, _ctx) = isolated();

    let config = load().expect("configuration load should succeed without files");
    let defaults = AppConfig::default();

    assert_eq!(config.http.address, defaults.http.address);
    assert_eq!(config.http.port, defaults.http.port);
    assert_eq!(config.auth.gates.general.suffix, "@NEXGlab.edu.dz");
    assert_eq!(config.auth.gates.institutional.suffix, "@enstp.edu.dz");
    assert_eq!(config.auth.credential_cookie, "emailENSTP");
    assert_eq!(config.auth.flag_cookie, "enstp_auth");
    assert_eq!(config.auth.cookie_max_age_seconds, 604_800);
    assert_eq!(config.auth.fallback_path, "/enstp");
    assert_eq!(config.locale.default, Locale::Fr);
    assert_eq!(config.labs.slow_load_after_ms, 5_000);
}

#[test]
#[serial]
fn load_picks_first_available_file_in_search_order() {
    let (temp_dir, _ctx) = isolated();

    write_config_file(
        temp_dir.path(),
        "nexglab.toml",
        r#"
        [http]
        port = 4242
        "#,
    );
    write_config_file(
        temp_dir.path(),
        "config/nexglab.toml",
        r#"
        [http]
        port = 5151
        "#,
    );

    let config = load().expect("configuration load should pick the first file");
    assert_eq!(config.http.port, 4242);
}

#[test]
#[serial]
fn load_merges_partial_file_with_defaults() {
    let (temp_dir, _ctx) = isolated();

    write_config_file(
        temp_dir.path(),
        "nexglab.toml",
        r#"
        [auth.gates.general]
        suffix = "@portal.example"

        [locale]
        default = "en"
        "#,
    );

    let config = load().expect("configuration load should succeed");
    let defaults = AppConfig::default();

    assert_eq!(config.auth.gates.general.suffix, "@portal.example");
    assert_eq!(
        config.auth.gates.institutional.suffix,
        defaults.auth.gates.institutional.suffix
    );
    assert_eq!(config.locale.default, Locale::En);
    assert_eq!(config.http.port, defaults.http.port);
    assert_eq!(config.security.frame_ancestors, defaults.security.frame_ancestors);
}

#[test]
#[serial]
fn load_honours_explicit_config_path() {
    let (temp_dir, mut ctx) = isolated();

    let path = write_config_file(
        temp_dir.path(),
        "elsewhere/portal.toml",
        r#"
        [labs]
        slow_load_after_ms = 1500
        "#,
    );
    ctx.set_var("NEXGLAB_CONFIG", path.to_string_lossy());

    let config = load().expect("configuration load should read the explicit file");
    assert_eq!(config.labs.slow_load_after_ms, 1_500);
}

#[test]
#[serial]
fn load_applies_environment_overrides() {
    let (temp_dir, mut ctx) = isolated();

    write_config_file(
        temp_dir.path(),
        "nexglab.toml",
        r#"
        [http]
        port = 3030
        "#,
    );

    ctx.set_var("NEXGLAB__HTTP__PORT", "8080");
    ctx.set_var("NEXGLAB__LOCALE__DEFAULT", "ar");

    let config = load().expect("configuration load should honour env overrides");
    assert_eq!(config.http.port, 8080);
    assert_eq!(config.locale.default, Locale::Ar);
}

#[test]
#[serial]
fn load_rejects_unsupported_default_locale() {
    let (_temp_dir, mut ctx) = isolated();

    ctx.set_var("NEXGLAB__LOCALE__DEFAULT", "de");

    let error = load().expect_err("an unknown locale must not load");
    assert!(
        error.to_string().contains("invalid configuration"),
        "unexpected error message: {error}"
    );
}

#[test]
#[serial]
fn load_rejects_relative_fallback_path() {
    let (_temp_dir, mut ctx) = isolated();

    ctx.set_var("NEXGLAB__AUTH__FALLBACK_PATH", "enstp");

    let error = load().expect_err("a relative fallback path must not load");
    assert!(error.to_string().contains("fallback_path"));
}

#[test]
#[serial]
fn load_rejects_fallback_paths_that_leave_the_site() {
    for value in ["//evil.example", "/enstp\r\nx", "/\t/evil.example", "/\\evil.example"] {
        let (_temp_dir, mut ctx) = isolated();
        ctx.set_var("NEXGLAB__AUTH__FALLBACK_PATH", value);

        let error = load().expect_err("a non-local fallback path must not load");
        assert!(
            error.to_string().contains("fallback_path"),
            "unexpected error for {value:?}: {error}"
        );
    }
}

#[test]
fn local_path_rule_accepts_only_visible_same_site_paths() {
    assert!(is_local_path("/enstp"));
    assert!(is_local_path("/enstp/ci/dib?x=1"));
    for value in ["", "enstp", "//host", "/x\ny", "/\t/host", "/\\host", "/é", "/a b"] {
        assert!(!is_local_path(value), "{value:?} should be rejected");
    }
}

#[test]
#[serial]
fn load_errors_on_invalid_toml_contents() {
    let (temp_dir, _ctx) = isolated();

    write_config_file(
        temp_dir.path(),
        "nexglab.toml",
        r#"
        [http]
        port = "not-a-number
        "#,
    );

    let error = load().expect_err("invalid TOML should cause load to fail");
    let message = error.to_string();
    assert!(
        message.contains("invalid configuration") || message.contains("unable to build configuration"),
        "unexpected error message: {message}"
    );
}

#[test]
fn auth_config_defaults_keep_gate_suffixes_apart() {
    let defaults = AuthConfig::default();
    assert_ne!(defaults.gates.general.suffix, defaults.gates.institutional.suffix);
    assert!(defaults
        .gates
        .university
        .suffix
        .ends_with(&defaults.gates.institutional.suffix));
}

#[test]
fn security_config_renders_frame_ancestors_policy() {
    let mut security = SecurityConfig::default();
    assert_eq!(security.allow_origin, "*");

    security.frame_ancestors = vec!["'self'".into()];
    assert_eq!(security.content_security_policy(), "frame-ancestors 'self';");
}

#[test]
fn labs_config_defaults_point_at_external_hosts() {
    let labs = LabsConfig::default();
    for url in [&labs.rmr_url, &labs.soils_url, &labs.geology_url] {
        assert!(url.starts_with("https://"), "{url} should be https");
    }
}

#[test]
fn http_config_defaults_match_expected_host_and_port() {
    let defaults = HttpConfig::default();
    assert_eq!(defaults.address, "127.0.0.1");
    assert_eq!(defaults.port, 3000);
}
