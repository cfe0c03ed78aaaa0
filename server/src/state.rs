//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the storefront API and the
//! proxy limits read from configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream API base URL without a trailing slash.
    pub upstream: Arc<str>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Build state from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        // The upstream is addressed directly, never through a system proxy.
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            upstream: Arc::from(config.api_upstream_url.as_str()),
            max_body_bytes: config.proxy_max_body_bytes,
        })
    }
}
