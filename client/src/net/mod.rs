//! Networking modules for the clinic REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and
//! `error` classifies failures for the pages that surface them.

pub mod api;
pub mod error;
pub mod types;
