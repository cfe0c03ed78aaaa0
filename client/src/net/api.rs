//! REST API helpers for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an `ApiError`. A 401 on any endpoint except
//! login also fires `session_expiry::notify` before the error is returned,
//! so the global session handling runs no matter which page made the call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Product, User};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const PRODUCTS_ENDPOINT: &str = "/api/products";

/// Classify a failed authenticated response and raise the expiry signal
/// when it is a 401.
#[cfg(any(test, feature = "hydrate"))]
fn authenticated_failure(status: u16, body: &str) -> ApiError {
    let err = ApiError::from_response(status, body);
    if err.is_session_expired() && !super::session_expiry::notify() {
        leptos::logging::warn!("session expired with no expiry handler installed");
    }
    err
}

/// Sign in via `POST /api/auth/login` and return the signed-in user.
///
/// # Errors
///
/// Returns `ApiError::Server` for rejected credentials (including 401, which
/// does not fire the expiry signal here), or a network/decode error.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{LoginRequest, LoginResponse};

        let payload = LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_credential_response(resp.status(), &body));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the server-side session via `POST /api/auth/logout`.
///
/// Best-effort: the local session is already cleared by the caller.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the product catalogue from `GET /api/products`.
///
/// # Errors
///
/// Returns `ApiError::SessionExpired` on 401 (after firing the expiry
/// signal), `ApiError::Server` on other non-2xx statuses, or a
/// network/decode error.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PRODUCTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(authenticated_failure(resp.status(), &body));
        }
        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
