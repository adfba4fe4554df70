//! Cookie guard for `/dashboard/**`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before Leptos renders a dashboard page. The `token` cookie written
//! by the browser after login is decoded (not verified; the API verifies
//! it on every call) and a missing, malformed, or expired token redirects to
//! `/login`. A bare `/dashboard` is forwarded to the role's landing page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use medicare_client::util::auth::{GuardDecision, resolve_role};
use medicare_client::util::token::now_secs;
use medicare_client::util::transport::TOKEN_KEY;

const DASHBOARD_PATH: &str = "/dashboard";

fn is_dashboard_path(path: &str) -> bool {
    path == DASHBOARD_PATH || path.starts_with("/dashboard/")
}

/// Where to send a request for `path`, or `None` to let it through.
pub(crate) fn redirect_target(path: &str, token: Option<&str>, now_secs: u64) -> Option<&'static str> {
    if !is_dashboard_path(path) {
        return None;
    }
    match resolve_role(token, now_secs) {
        GuardDecision::Redirect(target) => Some(target),
        GuardDecision::Allow(role) if path.trim_end_matches('/') == DASHBOARD_PATH => Some(role.landing_path()),
        GuardDecision::Allow(_) => None,
    }
}

/// Middleware entry point (`axum::middleware::from_fn`).
pub async fn require_session(jar: CookieJar, req: Request, next: Next) -> Response {
    let token = jar.get(TOKEN_KEY).map(|c| c.value().to_owned());
    match redirect_target(req.uri().path(), token.as_deref(), now_secs()) {
        Some(target) => {
            tracing::debug!(path = %req.uri().path(), %target, "dashboard guard redirect");
            Redirect::temporary(target).into_response()
        }
        None => next.run(req).await,
    }
}
