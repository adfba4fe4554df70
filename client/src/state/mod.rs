//! Application state and the context object that carries it.
//!
//! DESIGN
//! ======
//! `AppContext` is built once in `App` and handed down through Leptos
//! context. Components read through the `ReadSignal` accessors and write
//! only through the named mutators below, so every session or filter change
//! has one entry point.

pub mod appointments;
pub mod listing;
pub mod search;
pub mod session;
pub mod toast;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

use self::search::SearchState;
use self::session::SessionState;
use self::toast::{ToastKind, ToastState};
use crate::net::error::ApiError;
use crate::net::types::Role;
use crate::util::{token, transport};

#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<SessionState>,
    search: RwSignal<SearchState>,
    toasts: RwSignal<ToastState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            search: RwSignal::new(SearchState::default()),
            toasts: RwSignal::new(ToastState::default()),
        }
    }

    /// Register this context for all descendants.
    pub fn provide(self) {
        provide_context(self);
    }

    /// Fetch the context provided by `App`.
    ///
    /// # Panics
    ///
    /// Panics when called outside the `App` tree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    // --- read ---------------------------------------------------------------

    pub fn session(self) -> ReadSignal<SessionState> {
        self.session.read_only()
    }

    pub fn search(self) -> ReadSignal<SearchState> {
        self.search.read_only()
    }

    pub fn toasts(self) -> ReadSignal<ToastState> {
        self.toasts.read_only()
    }

    /// Current bearer token without subscribing.
    pub fn token(self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    // --- session writes -----------------------------------------------------

    /// Hydrate from `token`, or from the ambient cookie/storage token when
    /// none is supplied. A form-selected role that disagrees with the
    /// token's role is only logged.
    pub fn hydrate_session(self, token: Option<String>) -> bool {
        let token = token.or_else(transport::read);
        let mut authenticated = false;
        self.session.update(|s| {
            authenticated = s.hydrate(token, token::now_secs());
            if !s.role_matches_token() {
                log::warn!("selected role {:?} differs from token role {:?}", s.role(), s.token_role());
            }
        });
        authenticated
    }

    /// Persist a freshly issued token and hydrate the session from it.
    pub fn sign_in(self, token: String) -> bool {
        transport::persist(&token);
        self.hydrate_session(Some(token))
    }

    pub fn set_role(self, role: Role) {
        self.session.update(|s| s.set_role(role));
    }

    /// Clear the session and remove the token from cookie and storage.
    pub fn sign_out(self) {
        transport::clear();
        self.session.update(SessionState::clear);
    }

    // --- search writes ------------------------------------------------------

    pub fn commit_query(self, query: &str) {
        if self.search.with_untracked(|s| s.query != query.trim()) {
            self.search.update(|s| {
                s.set_query(query);
            });
        }
    }

    pub fn set_specialization(self, specialization: &str) {
        if self.search.with_untracked(|s| s.specialization != specialization) {
            self.search.update(|s| {
                s.set_specialization(specialization);
            });
        }
    }

    // --- notifications ------------------------------------------------------

    /// Show a toast; it removes itself after `TOAST_TTL_MS` in the browser.
    pub fn notify(self, kind: ToastKind, message: impl Into<String>) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(kind, message));
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(toast::TOAST_TTL_MS, move || {
                toasts.update(|t| {
                    t.dismiss(id);
                });
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    pub fn success(self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    /// Surface a failed API call. A 401/403 means the stored token is no
    /// longer accepted, so the session is dropped and the dashboard's
    /// unauthenticated redirect takes over.
    pub fn api_error(self, error: &ApiError) {
        self.error(error.user_message());
        if error.is_auth_rejection() {
            log::warn!("token rejected by API, signing out: {error}");
            self.sign_out();
        }
    }

    pub fn dismiss(self, id: u64) {
        self.toasts.update(|t| {
            t.dismiss(id);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
