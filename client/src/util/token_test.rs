use super::*;

fn doctor_payload() -> serde_json::Value {
    serde_json::json!({
        "userId": "d-1",
        "email": "a@x.com",
        "role": "DOCTOR",
        "iat": 1_700_000_000_u64,
        "exp": 1_700_086_400_u64
    })
}

#[test]
fn decodes_well_formed_token() {
    let token = encode_test_token(&doctor_payload());
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, "d-1");
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.role, Role::Doctor);
    assert_eq!(claims.name, None);
}

#[test]
fn role_claim_round_trips_for_both_roles() {
    for role in [Role::Patient, Role::Doctor] {
        let token = encode_test_token(&serde_json::json!({
            "userId": "u", "email": "u@x.com", "role": role.as_claim()
        }));
        assert_eq!(decode_claims(&token).unwrap().role, role);
    }
}

#[test]
fn optional_profile_claims_are_read() {
    let token = encode_test_token(&serde_json::json!({
        "userId": "d-2",
        "email": "b@x.com",
        "role": "DOCTOR",
        "name": "Dr. B",
        "photo_url": "https://randomuser.me/b.jpg",
        "specialization": "Cardiology"
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.name.as_deref(), Some("Dr. B"));
    assert_eq!(claims.specialization.as_deref(), Some("Cardiology"));
}

#[test]
fn rejects_wrong_segment_count() {
    assert_eq!(decode_claims("abc"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed));
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    assert_eq!(decode_claims(""), Err(TokenError::Malformed));
}

#[test]
fn rejects_non_base64_payload() {
    assert!(matches!(decode_claims("aaa.!!!.sig"), Err(TokenError::Encoding(_))));
}

#[test]
fn rejects_payload_missing_claims() {
    let token = encode_test_token(&serde_json::json!({ "email": "a@x.com" }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn rejects_unknown_role() {
    let token = encode_test_token(&serde_json::json!({
        "userId": "u", "email": "u@x.com", "role": "ADMIN"
    }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}

#[test]
fn tolerates_padded_payload() {
    let token = encode_test_token(&doctor_payload());
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    parts[1].push_str("==");
    assert!(decode_claims(&parts.join(".")).is_ok());
}

#[test]
fn expiry_is_enforced_by_valid_decode() {
    let token = encode_test_token(&doctor_payload());
    assert!(decode_valid_claims(&token, 1_700_000_100).is_ok());
    assert_eq!(
        decode_valid_claims(&token, 1_700_086_400),
        Err(TokenError::Expired { exp: 1_700_086_400 })
    );
}

#[test]
fn token_without_exp_never_expires() {
    let token = encode_test_token(&serde_json::json!({
        "userId": "u", "email": "u@x.com", "role": "PATIENT"
    }));
    assert!(decode_valid_claims(&token, u64::MAX).is_ok());
}

#[test]
fn now_secs_is_after_2020() {
    assert!(now_secs() > 1_577_836_800);
}
