//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome shared across routes, reading the session
//! from Leptos context where they need it.

pub mod logout_button;
pub mod product_card;
pub mod role_badge;
