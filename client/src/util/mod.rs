//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep validation, navigation targets and auth side effects
//! out of page components so they can be reused and tested.

pub mod auth;
pub mod mount;
pub mod nav;
pub mod validation;
