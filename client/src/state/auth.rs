//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as `RwSignal<AuthState>` context by the app root and read by
//! every page. Route guards, role-aware headers and the login redirect all
//! derive from this one value.
//!
//! State machine: `Anonymous -> (login success) -> Authenticated ->
//! (logout | expiry) -> Anonymous`. Nothing else moves it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Notice shown on the login page after the API reported an expired session.
pub const SESSION_EXPIRED_MESSAGE: &str = "登入已過期，請重新登入";

/// Coarse session phase derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the current user and any pending expiry
/// notice.
///
/// Authentication is derived from `user`, so the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Empty unless the session was ended by an expiry signal and the login
    /// page has not shown it yet.
    pub auth_expired_message: String,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }

    /// Replace the session user after a successful login. A fresh session
    /// drops any expiry notice left over from before it.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.auth_expired_message.clear();
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    /// End the session because the API rejected it, leaving `message` for
    /// the login page. Only an authenticated session can expire; returns
    /// whether one did.
    pub fn expire(&mut self, message: impl Into<String>) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.user = None;
        self.auth_expired_message = message.into();
        true
    }

    pub fn has_expired_message(&self) -> bool {
        !self.auth_expired_message.is_empty()
    }

    pub fn clear_auth_expired_message(&mut self) {
        self.auth_expired_message.clear();
    }

    /// Return the pending expiry notice, clearing it in the same step.
    pub fn take_auth_expired_message(&mut self) -> Option<String> {
        if self.auth_expired_message.is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.auth_expired_message);
        Some(message)
    }
}
