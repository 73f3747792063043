use nexglab_auth::{
    validate, AccessError, Authenticator, Gate, GuardDecision, PathMatcher, ProtectedPaths,
    Session,
};
use nexglab_config::{AuthConfig, GateConfig};

fn default_auth_config() -> AuthConfig {
    AuthConfig::default()
}

fn authenticator() -> Authenticator {
    Authenticator::new(default_auth_config())
}

#[test]
fn validate_succeeds_iff_string_ends_with_suffix() {
    let suffix = "@enstp.edu.dz";
    let cases = [
        ("a@enstp.edu.dz", true),
        ("a@enstp.edu.dz.evil.com", false),
        ("a@ENSTP.EDU.DZ", false),
        ("@enstp.edu.dz", true),
        ("enstp.edu.dz", false),
        ("", false),
    ];

    for (input, expected) in cases {
        assert_eq!(
            validate(input, suffix).is_ok(),
            expected,
            "validate({input:?}) should be {expected}"
        );
        assert_eq!(validate(input, suffix).is_ok(), input.ends_with(suffix));
    }
}

#[test]
fn general_gate_accepts_platform_domain_only() {
    let auth = authenticator();

    let credential = auth
        .admit(Gate::General, "x@NEXGlab.edu.dz")
        .expect("platform address should be admitted");
    assert_eq!(credential.email(), "x@NEXGlab.edu.dz");
    assert_eq!(credential.gate(), Gate::General);

    let error = auth
        .admit(Gate::General, "x@bad.com")
        .expect_err("foreign domain must be rejected");
    assert!(matches!(error, AccessError::InvalidEmail { .. }));
}

#[test]
fn resubmission_after_failure_is_unrestricted() {
    let auth = authenticator();
    for _ in 0..50 {
        assert!(auth.admit(Gate::Institutional, "x@bad.com").is_err());
    }
    assert!(auth.admit(Gate::Institutional, "x@enstp.edu.dz").is_ok());
}

#[test]
fn gate_suffixes_follow_configuration() {
    let mut config = default_auth_config();
    config.gates.institutional = GateConfig {
        suffix: "@example.edu".to_string(),
    };
    let auth = Authenticator::new(config);

    assert_eq!(auth.suffix(Gate::Institutional), "@example.edu");
    assert!(auth.admit(Gate::Institutional, "x@example.edu").is_ok());
    assert!(auth.authenticate(Some("x@example.edu")).is_some());
    assert!(auth.authenticate(Some("x@enstp.edu.dz")).is_none());
}

#[test]
fn guard_redirects_protected_request_without_session() {
    let auth = authenticator();
    let session = auth.authenticate(None);
    assert_eq!(
        auth.guard("/enstp/ci/dib", session.as_ref()),
        GuardDecision::Redirect("/enstp".to_string())
    );
}

#[test]
fn guard_redirects_protected_request_with_invalid_cookie() {
    let auth = authenticator();
    let session = auth.authenticate(Some("x@NEXGlab.edu.dz"));
    assert_eq!(
        auth.guard("/enstp/ci/dib/mecanique-roches/rmr-lab", session.as_ref()),
        GuardDecision::Redirect("/enstp".to_string())
    );
}

#[test]
fn guard_passes_protected_request_with_valid_cookie() {
    let auth = authenticator();
    let session = auth.authenticate(Some("x@enstp.edu.dz"));
    assert_eq!(
        session,
        Some(Session {
            email: "x@enstp.edu.dz".to_string()
        })
    );
    assert_eq!(auth.guard("/enstp/ci/dib", session.as_ref()), GuardDecision::Pass);
}

#[test]
fn guard_always_passes_unprotected_paths() {
    let auth = authenticator();
    let valid = auth.authenticate(Some("x@enstp.edu.dz"));
    for session in [None, valid.as_ref()] {
        assert_eq!(auth.guard("/enstp", session), GuardDecision::Pass);
        assert_eq!(auth.guard("/", session), GuardDecision::Pass);
    }
}

#[test]
fn guard_uses_configured_fallback_and_matchers() {
    let mut config = default_auth_config();
    config.fallback_path = "/login".to_string();
    let auth = Authenticator::new(config)
        .with_protected_paths(ProtectedPaths::new(vec![PathMatcher::Prefix("/labs")]));

    assert_eq!(
        auth.guard("/labs/rmr", None),
        GuardDecision::Redirect("/login".to_string())
    );
    assert_eq!(auth.guard("/enstp/ci/dib", None), GuardDecision::Pass);
}
