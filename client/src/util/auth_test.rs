use super::*;
use crate::util::token::encode_test_token;

const NOW: u64 = 1_700_000_000;

fn token(role: &str, exp: u64) -> String {
    encode_test_token(&serde_json::json!({
        "userId": "u-1", "email": "a@x.com", "role": role, "exp": exp
    }))
}

// =============================================================
// resolve_role
// =============================================================

#[test]
fn missing_cookie_redirects_to_login() {
    assert_eq!(resolve_role(None, NOW), GuardDecision::Redirect("/login"));
    assert_eq!(resolve_role(Some(""), NOW), GuardDecision::Redirect("/login"));
}

#[test]
fn undecodable_cookie_redirects_to_login() {
    assert_eq!(resolve_role(Some("garbage"), NOW), GuardDecision::Redirect("/login"));
}

#[test]
fn expired_cookie_redirects_to_login() {
    let t = token("DOCTOR", NOW - 1);
    assert_eq!(resolve_role(Some(&t), NOW), GuardDecision::Redirect("/login"));
}

#[test]
fn valid_cookie_yields_embedded_role() {
    let t = token("DOCTOR", NOW + 60);
    assert_eq!(resolve_role(Some(&t), NOW), GuardDecision::Allow(Role::Doctor));
    let t = token("PATIENT", NOW + 60);
    assert_eq!(resolve_role(Some(&t), NOW), GuardDecision::Allow(Role::Patient));
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_not_redirect_before_hydration() {
    assert!(!should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_redirect_after_failed_hydration() {
    let mut state = SessionState::default();
    state.hydrate(Some("broken".to_owned()), NOW);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_valid() {
    let mut state = SessionState::default();
    state.hydrate(Some(token("PATIENT", NOW + 60)), NOW);
    assert!(!should_redirect_unauth(&state));
}
