use super::*;
use crate::util::token::encode_test_token;

const NOW: u64 = 1_700_000_000;

fn token_for(role: &str) -> String {
    encode_test_token(&serde_json::json!({
        "userId": "u-1",
        "email": "a@x.com",
        "role": role,
        "name": "Ada",
        "exp": NOW + 3600
    }))
}

// =============================================================
// Defaults and mutators
// =============================================================

#[test]
fn default_session_is_empty_patient() {
    let state = SessionState::default();
    assert!(state.identity().is_none());
    assert!(state.token().is_none());
    assert_eq!(state.role(), Role::Patient);
    assert!(!state.is_hydrated());
    assert!(!state.is_authenticated());
}

#[test]
fn set_role_does_not_touch_identity() {
    let mut state = SessionState::default();
    state.hydrate(Some(token_for("PATIENT")), NOW);
    state.set_role(Role::Doctor);
    assert_eq!(state.role(), Role::Doctor);
    assert_eq!(state.identity().unwrap().role, Role::Patient);
}

#[test]
fn clear_removes_everything() {
    let mut state = SessionState::default();
    state.hydrate(Some(token_for("DOCTOR")), NOW);
    state.clear();
    assert!(state.identity().is_none());
    assert!(state.token().is_none());
    assert_eq!(state.role(), Role::Patient);
    assert!(!state.is_authenticated());
}

// =============================================================
// hydrate
// =============================================================

#[test]
fn hydrate_populates_identity_with_token_role() {
    for (claim, role) in [("PATIENT", Role::Patient), ("DOCTOR", Role::Doctor)] {
        let mut state = SessionState::default();
        assert!(state.hydrate(Some(token_for(claim)), NOW));
        let identity = state.identity().unwrap();
        assert_eq!(identity.role, role);
        assert_eq!(identity.id, "u-1");
        assert_eq!(state.role(), role);
        assert_eq!(state.token(), Some(token_for(claim).as_str()));
        assert!(state.is_authenticated());
    }
}

#[test]
fn hydrate_malformed_token_clears_session() {
    let mut state = SessionState::default();
    state.hydrate(Some(token_for("DOCTOR")), NOW);
    assert!(!state.hydrate(Some("not-a-token".to_owned()), NOW));
    assert!(state.identity().is_none());
    assert!(state.token().is_none());
    assert!(state.is_hydrated());
}

#[test]
fn hydrate_expired_token_clears_session() {
    let mut state = SessionState::default();
    assert!(!state.hydrate(Some(token_for("DOCTOR")), NOW + 7200));
    assert!(!state.is_authenticated());
}

#[test]
fn hydrate_without_token_is_unauthenticated() {
    let mut state = SessionState::default();
    assert!(!state.hydrate(None, NOW));
    assert!(!state.hydrate(Some("   ".to_owned()), NOW));
    assert!(state.is_hydrated());
    assert!(!state.is_authenticated());
}

#[test]
fn rehydrating_with_new_token_replaces_identity() {
    let mut state = SessionState::default();
    state.hydrate(Some(token_for("PATIENT")), NOW);
    state.hydrate(Some(token_for("DOCTOR")), NOW);
    assert_eq!(state.identity().unwrap().role, Role::Doctor);
}

// =============================================================
// Role desync reporting
// =============================================================

#[test]
fn role_mismatch_is_reported_not_fixed() {
    let mut state = SessionState::default();
    state.hydrate(Some(token_for("DOCTOR")), NOW);
    assert!(state.role_matches_token());
    state.set_role(Role::Patient);
    assert!(!state.role_matches_token());
    assert_eq!(state.identity().unwrap().role, Role::Doctor);
    assert_eq!(state.role(), Role::Patient);
}

#[test]
fn hydrate_keeps_a_selected_role_that_disagrees() {
    let mut state = SessionState::default();
    state.set_role(Role::Doctor);
    assert!(state.hydrate(Some(token_for("PATIENT")), NOW));
    assert_eq!(state.role(), Role::Doctor);
    assert_eq!(state.token_role(), Some(Role::Patient));
    assert!(!state.role_matches_token());
}

#[test]
fn hydrate_without_selection_reports_token_role() {
    let mut state = SessionState::default();
    state.hydrate(Some(token_for("DOCTOR")), NOW);
    assert_eq!(state.role(), Role::Doctor);
    assert!(state.role_matches_token());
}

#[test]
fn role_matches_vacuously_when_signed_out() {
    let mut state = SessionState::default();
    state.set_role(Role::Doctor);
    assert!(state.role_matches_token());
}

// =============================================================
// Identity
// =============================================================

#[test]
fn display_name_falls_back_to_email() {
    let mut identity = Identity {
        id: "u".to_owned(),
        email: "a@x.com".to_owned(),
        role: Role::Patient,
        name: Some("Ada".to_owned()),
        photo_url: None,
        specialization: None,
    };
    assert_eq!(identity.display_name(), "Ada");
    identity.name = Some("  ".to_owned());
    assert_eq!(identity.display_name(), "a@x.com");
    identity.name = None;
    assert_eq!(identity.display_name(), "a@x.com");
}
