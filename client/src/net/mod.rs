//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, `error`
//! classifies failures and `session_expiry` carries the global 401 signal.

pub mod api;
pub mod error;
pub mod session_expiry;
pub mod types;
