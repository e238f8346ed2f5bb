//! GeoNames client configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Environment variable holding the GeoNames account name
pub const USERNAME_ENV_VAR: &str = "GEONAMES_USER";

/// User-Agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str = concat!("geonames/", env!("CARGO_PKG_VERSION"));

/// Configuration for the GeoNames web service client
///
/// Built once by the caller and handed to [`crate::GeoNamesClient::new`];
/// the client never reads the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoNamesConfig {
    /// Registered GeoNames account name, sent as `username` on every request
    #[serde(default)]
    pub username: String,

    /// Base URL of the web service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds, covering connect and body read
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Headers sent with every request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

fn default_base_url() -> String {
    "http://api.geonames.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string()),
    ])
}

impl Default for GeoNamesConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            headers: default_headers(),
        }
    }
}

impl GeoNamesConfig {
    /// Create a configuration for the given account name
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Create a configuration with the username taken from `GEONAMES_USER`
    ///
    /// The username is left empty when the variable is unset; [`Self::validate`]
    /// rejects that.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration with the username resolved through `lookup`
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(lookup(USERNAME_ENV_VAR).unwrap_or_default())
    }

    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            username: "DummyUser".to_string(),
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Add or replace a header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err(format!(
                "username must not be empty (set it explicitly or via {USERNAME_ENV_VAR})"
            ));
        }

        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
