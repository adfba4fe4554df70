//! Token transport: `localStorage` for the browser's API calls and a cookie
//! for the server-side route guard.
//!
//! TRADE-OFFS
//! ==========
//! The cookie is written from script (not `HttpOnly`) because the API hands
//! the token to the browser, not to our host. SSR paths no-op.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// `localStorage` key and cookie name for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Cookie lifetime, one day.
pub const COOKIE_MAX_AGE_SECS: u32 = 86_400;

/// `document.cookie` assignment that stores `token`.
pub fn set_cookie_directive(token: &str) -> String {
    format!("{TOKEN_KEY}={token}; path=/; max-age={COOKIE_MAX_AGE_SECS}")
}

/// `document.cookie` assignment that expires the token cookie.
pub fn clear_cookie_directive() -> String {
    format!("{TOKEN_KEY}=; path=/; max-age=0")
}

/// Find a non-empty cookie value by name in a `Cookie` header or
/// `document.cookie` string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Store the token in both places.
pub fn persist(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&set_cookie_directive(token));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Token from the cookie, falling back to `localStorage`.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let from_cookie = html_document()
            .and_then(|doc| doc.cookie().ok())
            .and_then(|cookies| cookie_value(&cookies, TOKEN_KEY).map(str::to_owned));
        from_cookie.or_else(|| {
            local_storage()
                .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
                .filter(|t| !t.is_empty())
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the token from both places.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&clear_cookie_directive());
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
}
