//! API failure taxonomy shared by every network call.
//!
//! ERROR HANDLING
//! ==============
//! Pages turn an `ApiError` into display text with `display_message`.
//! `SessionExpired` yields no text: the session-expiry signal already moved
//! the app to the login page with its own notice.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Failure of a call to the remote API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response other than an expired session.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    /// HTTP 401 on an authenticated call.
    #[error("session expired")]
    SessionExpired,

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Network calls only run in the browser.
    #[error("not available on server")]
    Unavailable,
}

pub const STATUS_UNAUTHORIZED: u16 = 401;

impl ApiError {
    /// Classify a non-2xx response from an authenticated endpoint.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == STATUS_UNAUTHORIZED {
            return Self::SessionExpired;
        }
        Self::from_credential_response(status, body)
    }

    /// Classify a non-2xx response where 401 means bad credentials rather
    /// than an expired session (the login endpoint).
    pub fn from_credential_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        Self::Server { status, message }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Text a page should show for this failure, or `None` when the failure
    /// is handled globally.
    pub fn display_message(&self, fallback: &str) -> Option<String> {
        match self {
            Self::SessionExpired => None,
            Self::Server { message: Some(message), .. } => Some(message.clone()),
            Self::Server { message: None, .. } | Self::Network(_) | Self::Decode(_) | Self::Unavailable => {
                Some(fallback.to_owned())
            }
        }
    }
}
