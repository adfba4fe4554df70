//! Bearer-token payload decoding.
//!
//! The signature is not verified here; the API remains the authority and
//! rejects forged or revoked tokens on use. Decoding only extracts the
//! identity claims for rendering and for the route guard.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Role;

/// Identity claims carried in the token payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId", alias = "id")]
    pub user_id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub exp: Option<u64>,
}

impl Claims {
    /// Tokens without `exp` never expire client-side.
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated segments")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token claims are invalid: {0}")]
    Claims(String),
    #[error("token expired at {exp}")]
    Expired { exp: u64 },
}

/// Decode the payload segment of a JWT without checking expiry.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not three segments, the payload
/// is not base64url, or the JSON lacks the identity claims.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };
    if header.is_empty() || payload.is_empty() {
        return Err(TokenError::Malformed);
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Decode and reject tokens whose `exp` has passed.
///
/// # Errors
///
/// Everything [`decode_claims`] returns, plus [`TokenError::Expired`].
pub fn decode_valid_claims(token: &str, now_secs: u64) -> Result<Claims, TokenError> {
    let claims = decode_claims(token)?;
    if claims.is_expired(now_secs) {
        return Err(TokenError::Expired { exp: claims.exp.unwrap_or_default() });
    }
    Ok(claims)
}

/// Current Unix time in seconds, from whichever clock the target has.
pub fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0) as u64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

/// Unsigned token with the given payload, for tests across the crate.
#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
