//! `/api/*` reverse proxy to the storefront API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin `/api/...` paths. This handler
//! forwards them to the configured upstream unchanged (method, path, query,
//! body, end-to-end headers) and relays the response, including the status
//! code the client uses to detect an expired session.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Connection-scoped headers that must not cross the proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    /// The incoming body exceeded the configured limit.
    #[error("request body too large: {0}")]
    TooLarge(String),

    /// The incoming body could not be read.
    #[error("request body unreadable: {0}")]
    Body(String),

    /// The upstream could not be reached or timed out.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The upstream response could not be relayed.
    #[error("upstream response invalid: {0}")]
    Response(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Response(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// User-facing text, in the `{ "message": ... }` shape the client reads.
    fn public_message(&self) -> &'static str {
        match self {
            Self::TooLarge(_) => "請求內容過大",
            Self::Body(_) => "無法讀取請求內容",
            Self::Upstream(_) | Self::Response(_) => "服務暫時無法使用，請稍後再試",
        }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge(rejection.body_text())
        } else {
            Self::Body(rejection.body_text())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.public_message() });
        (self.status(), Json(body)).into_response()
    }
}

/// Join the upstream base with the incoming path and query.
pub(crate) fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path_and_query)
}

/// Whether a header may be copied across the proxy in either direction.
pub(crate) fn forwardable(name: &HeaderName) -> bool {
    *name != header::HOST && *name != header::CONTENT_LENGTH && !HOP_BY_HOP.contains(&name.as_str())
}

fn copy_headers(from: &HeaderMap) -> HeaderMap {
    from.iter()
        .filter(|(name, _)| forwardable(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`: forward to the upstream API.
///
/// The body size limit comes from the `DefaultBodyLimit` layer the router
/// installs.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.upstream, path_and_query);

    let body = body.map_err(|rejection| {
        tracing::warn!(status = rejection.status().as_u16(), %method, %url, "request body rejected");
        ProxyError::from(rejection)
    })?;

    let resp = state
        .http
        .request(method.clone(), &url)
        .headers(copy_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %method, %url, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = resp.status();
    let headers = copy_headers(resp.headers());
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ProxyError::Response(e.to_string()))?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
