//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("API_UPSTREAM_URL must start with http:// or https://, got '{0}'")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub upstream_url: String,
    pub proxy_timeout: Duration,
    pub max_body_bytes: usize,
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://127.0.0.1:8000`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    /// - `PROXY_MAX_BODY_BYTES`: default 10 MiB
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for unparseable numbers or a non-HTTP upstream.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See `from_env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let upstream_url = parse_upstream(lookup("API_UPSTREAM_URL").as_deref())?;
        let timeout_secs = parse_var(&lookup, "PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        let max_body_bytes = parse_var(&lookup, "PROXY_MAX_BODY_BYTES", DEFAULT_PROXY_MAX_BODY_BYTES)?;

        Ok(Self { port, upstream_url, proxy_timeout: Duration::from_secs(timeout_secs), max_body_bytes })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_UPSTREAM_URL);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
