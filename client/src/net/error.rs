//! Error taxonomy for REST calls.
//!
//! Validation failures never reach this type; they are caught by the form
//! layer before a request is built.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when the server gives no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response. `message` is the server's `{message}` field, if any.
    #[error("request failed with status {status}")]
    Server { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A protected call was attempted without a bearer token.
    #[error("You are not logged in!")]
    Unauthenticated,
    /// Called outside the browser (SSR pass).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Server` error from a status and the raw error body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<super::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty());
        Self::Server { status, message }
    }

    /// Text for a notification: the server message when present, otherwise
    /// the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Server { message: None, .. } | Self::Decode(_) => FALLBACK_MESSAGE.to_owned(),
            Self::Transport(_) | Self::Unauthenticated | Self::Unavailable => self.to_string(),
        }
    }

    /// True for 401/403, where the stored token is no longer accepted.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Server { status: 401 | 403, .. })
    }
}
