//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and transitions to `state`.

pub mod admin;
pub mod dashboard;
pub mod login;
