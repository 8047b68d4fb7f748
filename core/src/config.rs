//! Client configuration.
//!
//! The base address is resolved once, when the configuration is built, and
//! then handed to `LoanClient`/`LoanApi` explicitly.

/// Environment variable overriding the API base address.
pub const BASE_URL_ENV: &str = "LOAN_API_URL";

/// Base address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Settings for talking to the loan calculation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Loads config from env vars:
    /// - `LOAN_API_URL` (default: `/api`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// An empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}
