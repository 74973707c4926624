//! Client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_BASE_URL_ENV: &str = "FORUM_API_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{0}`; expected http:// or https://")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from `FORUM_API_URL`, defaulting to [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a value without an http(s) scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    /// Build config from an optional raw base URL; blank means default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a value without an http(s) scheme.
    pub fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
        }
        Ok(Self { base_url: raw.trim_end_matches('/').to_owned() })
    }

    /// Absolute URL for an API `path` such as `/api/post`.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
