//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Errors produced while reading server configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The upstream API URL is not an http(s) URL.
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the remote storefront API, without a trailing slash.
    pub api_upstream_url: String,
    pub proxy_timeout_secs: u64,
    pub proxy_max_body_bytes: usize,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:8080`
    /// - `PROXY_TIMEOUT_SECS`: default 15
    /// - `PROXY_MAX_BODY_BYTES`: default 1 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value or the
    /// upstream URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let proxy_timeout_secs = parse_var(&lookup, "PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        let proxy_max_body_bytes = parse_var(&lookup, "PROXY_MAX_BODY_BYTES", DEFAULT_PROXY_MAX_BODY_BYTES)?;

        let api_upstream_url = lookup("API_UPSTREAM_URL")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM_URL.to_owned());
        if !(api_upstream_url.starts_with("http://") || api_upstream_url.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(api_upstream_url));
        }
        let api_upstream_url = api_upstream_url.trim_end_matches('/').to_owned();

        Ok(Self { port, api_upstream_url, proxy_timeout_secs, proxy_max_body_bytes })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
