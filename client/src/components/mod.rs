//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and listing cards while reading and
//! writing shared state through the `AppContext` provider.

pub mod appointment_card;
pub mod doctor_card;
pub mod navbar;
pub mod pagination;
pub mod search_input;
pub mod sidebar;
pub mod toast_host;
