//! Route guarding, on both sides of hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host runs `resolve_role` against the request cookie before any
//! dashboard page renders, and the dashboard layout asks `current_role` for
//! the role that picks its sidebar. In the browser, `install_unauth_redirect`
//! sends the user back to `/login` once hydration finds no usable token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionState;
use crate::util::token;

/// Entry point for unauthenticated users.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a server-side guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow(Role),
    Redirect(&'static str),
}

/// Decide from the token cookie's value. Absent, undecodable, and expired
/// tokens all redirect to login.
pub fn resolve_role(token: Option<&str>, now_secs: u64) -> GuardDecision {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return GuardDecision::Redirect(LOGIN_PATH);
    };
    match token::decode_valid_claims(token, now_secs) {
        Ok(claims) => GuardDecision::Allow(claims.role),
        Err(e) => {
            log::warn!("invalid token cookie: {e}");
            GuardDecision::Redirect(LOGIN_PATH)
        }
    }
}

/// Role for layout composition, read from the request cookie during SSR.
///
/// # Errors
///
/// Fails (after setting a redirect to `/login`) when the cookie is missing
/// or unusable.
#[server]
pub async fn current_role() -> Result<Role, ServerFnError> {
    use axum_extra::extract::CookieJar;

    use crate::util::transport::TOKEN_KEY;

    let jar: CookieJar = leptos_axum::extract().await?;
    let cookie = jar.get(TOKEN_KEY).map(|c| c.value().to_owned());
    match resolve_role(cookie.as_deref(), token::now_secs()) {
        GuardDecision::Allow(role) => Ok(role),
        GuardDecision::Redirect(path) => {
            leptos_axum::redirect(path);
            Err(ServerFnError::new("unauthenticated"))
        }
    }
}

/// True once hydration has run and found no usable session.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.is_hydrated() && !state.is_authenticated()
}

/// Redirect to `/login` whenever hydration leaves the session empty.
pub fn install_unauth_redirect<F>(session: ReadSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
