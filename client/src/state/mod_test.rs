use super::*;
use crate::util::token::encode_test_token;

fn signed_in() -> AppContext {
    let ctx = AppContext::new();
    let token = encode_test_token(&serde_json::json!({
        "userId": "u-1",
        "email": "a@x.com",
        "role": "DOCTOR",
        "exp": 4_102_444_800_u64
    }));
    assert!(ctx.hydrate_session(Some(token)));
    ctx
}

fn messages(ctx: AppContext) -> Vec<String> {
    ctx.toasts().with_untracked(|t| t.items.iter().map(|toast| toast.message.clone()).collect())
}

#[test]
fn rejected_token_signs_out() {
    let ctx = signed_in();
    ctx.api_error(&ApiError::Server { status: 401, message: Some("jwt expired".to_owned()) });
    assert!(!ctx.session().with_untracked(SessionState::is_authenticated));
    assert_eq!(messages(ctx), ["jwt expired"]);
}

#[test]
fn other_api_errors_keep_the_session() {
    let ctx = signed_in();
    ctx.api_error(&ApiError::Server { status: 400, message: None });
    assert!(ctx.session().with_untracked(SessionState::is_authenticated));
    assert_eq!(messages(ctx), [crate::net::error::FALLBACK_MESSAGE]);
}

#[test]
fn hydrate_keeps_form_selected_role() {
    let ctx = signed_in();
    ctx.set_role(Role::Patient);
    ctx.hydrate_session(ctx.token());
    ctx.session().with_untracked(|s| {
        assert_eq!(s.role(), Role::Patient);
        assert_eq!(s.token_role(), Some(Role::Doctor));
        assert!(!s.role_matches_token());
    });
}
