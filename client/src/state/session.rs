//! Session store: the decoded identity, the bearer token, and the role the
//! user has selected in the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated by `hydrate` at page load and after login; cleared on logout or
//! when the stored token cannot be decoded. The selected role and the
//! token's role are separate pieces of state and are never reconciled.
//! `hydrate` never writes the selection, so a mismatch stays visible through
//! `role_matches_token`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Role;
use crate::util::token::{self, Claims};

/// Identity decoded from the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub specialization: Option<String>,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user_id,
            email: claims.email,
            role: claims.role,
            name: claims.name,
            photo_url: claims.photo_url,
            specialization: claims.specialization,
        }
    }
}

impl Identity {
    /// Name when the token carries one, otherwise the email.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.email)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    identity: Option<Identity>,
    token: Option<String>,
    selected_role: Option<Role>,
    hydrated: bool,
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Role chosen in the login/registration forms. Until one is chosen,
    /// the token's role, then the default.
    pub fn role(&self) -> Role {
        self.selected_role.or_else(|| self.token_role()).unwrap_or_default()
    }

    /// Role claimed by the current token.
    pub fn token_role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// True once `hydrate` has run, whatever its outcome.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.token.is_some()
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn set_role(&mut self, role: Role) {
        self.selected_role = Some(role);
    }

    /// Drop identity and token and forget the selected role.
    pub fn clear(&mut self) {
        self.identity = None;
        self.token = None;
        self.selected_role = None;
    }

    /// Decode `token` and populate identity and token from it. The selected
    /// role is left as it was.
    ///
    /// A missing or undecodable token leaves the session cleared; decode
    /// failures are logged, never returned. Returns whether the session is
    /// authenticated afterwards.
    pub fn hydrate(&mut self, token: Option<String>, now_secs: u64) -> bool {
        self.hydrated = true;
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            self.clear();
            return false;
        };
        match token::decode_valid_claims(&token, now_secs) {
            Ok(claims) => {
                self.identity = Some(Identity::from(claims));
                self.token = Some(token);
                true
            }
            Err(e) => {
                log::warn!("invalid session token, clearing session: {e}");
                self.clear();
                false
            }
        }
    }

    /// Whether the selected role agrees with the token's role. Vacuously
    /// true while unauthenticated or before any role is selected.
    pub fn role_matches_token(&self) -> bool {
        match (self.selected_role, self.token_role()) {
            (Some(selected), Some(claimed)) => selected == claimed,
            _ => true,
        }
    }
}
