//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (token storage,
//! timers, dialogs) from page and component logic to keep them testable.

pub mod auth;
pub mod browser;
pub mod debounce;
pub mod token;
pub mod transport;
