//! Small browser shims used by pages: confirm dialogs, viewport width, and
//! appointment date display.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths return neutral values (`false`, `None`) so server rendering
//! never depends on a window.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use chrono::{DateTime, FixedOffset};

/// Ask the user to confirm `message`. Always `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// `window.innerWidth` in CSS pixels, once a window exists.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Render an API timestamp in the viewer's local time as
/// `YYYY-MM-DD HH:MM`. Off the browser, and for anything that is not an
/// RFC 3339 timestamp, the input is shown as received.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    #[cfg(feature = "hydrate")]
    if let Some(offset) = local_offset_minutes(raw) {
        return display_date_at_offset(raw, offset);
    }
    raw.to_owned()
}

/// Format `raw` at a fixed offset of `east_minutes` from UTC.
pub fn display_date_at_offset(raw: &str, east_minutes: i32) -> String {
    let raw = raw.trim();
    let Ok(at) = DateTime::parse_from_rfc3339(raw) else {
        return raw.to_owned();
    };
    let Some(offset) = FixedOffset::east_opt(east_minutes * 60) else {
        return raw.to_owned();
    };
    at.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string()
}

/// The browser's UTC offset at the instant `raw` names, so daylight saving
/// follows the appointment date rather than today.
#[cfg(feature = "hydrate")]
fn local_offset_minutes(raw: &str) -> Option<i32> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let west_minutes = date.get_timezone_offset() as i32;
    Some(-west_minutes)
}
