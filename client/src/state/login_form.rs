//! Login form state for a single visit to the login page.
//!
//! DESIGN
//! ======
//! Submission is split into `begin_submit` (validate, lock the form, hand out
//! credentials) and `finish_submit` (apply the API result). The page only
//! calls the auth API when `begin_submit` returns credentials, and the form
//! stays locked for the whole interval between the two.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::error::ApiError;
use crate::util::nav::{AFTER_LOGIN, NavTarget};
use crate::util::validation::{Credentials, FieldErrors, validate_login};

/// Shown when the login failure carries no server message.
pub const LOGIN_FAILED_FALLBACK: &str = "登入失敗，請稍後再試";

/// Editable login form with validation and submission state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub field_errors: FieldErrors,
    pub is_submitting: bool,
    /// Message from the last failed login call.
    pub submit_error: Option<String>,
}

impl LoginFormState {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.field_errors.email = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.field_errors.password = None;
    }

    /// Inputs and the submit button are locked while a login call is in
    /// flight.
    pub fn inputs_disabled(&self) -> bool {
        self.is_submitting
    }

    /// Validate the form and, when valid, lock it for submission.
    ///
    /// Returns `None` (and records field errors) when validation fails or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting {
            return None;
        }
        self.submit_error = None;
        match validate_login(&self.email, &self.password) {
            Ok(credentials) => {
                self.field_errors = FieldErrors::default();
                self.is_submitting = true;
                Some(credentials)
            }
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }

    /// Apply the settled login call and return where to navigate, if
    /// anywhere.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<NavTarget> {
        self.is_submitting = false;
        match result {
            Ok(()) => Some(AFTER_LOGIN),
            Err(err) => {
                self.submit_error = err.display_message(LOGIN_FAILED_FALLBACK);
                None
            }
        }
    }
}
