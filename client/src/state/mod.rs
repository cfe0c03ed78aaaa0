//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `login_form`, `products`) so pages
//! depend on small focused models. Each model is plain data with transition
//! methods; pages wrap them in `RwSignal`s.

pub mod auth;
pub mod login_form;
pub mod products;
