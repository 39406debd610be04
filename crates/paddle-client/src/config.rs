//! Client configuration.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PaddleError;

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.paddle.com";
/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.paddle.com";
/// API version pinned by default.
pub const DEFAULT_API_VERSION: u32 = 3;
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Header carrying the API version pin.
pub const HDR_PADDLE_VERSION: &str = "paddle-version";

/// Which Paddle environment requests go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Test environment; no real money moves.
    #[default]
    Sandbox,
    /// Live environment.
    Production,
}

impl Environment {
    /// Map a test-mode flag onto an environment.
    #[must_use]
    pub const fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// Base URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Configuration for [`PaddleClient`](crate::PaddleClient).
///
/// Everything is supplied by the caller, either through the `with_*` builder
/// methods or by deserializing from the caller's own configuration source.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    api_key: String,
    environment: Environment,
    api_version: u32,
    timeout_seconds: u64,
    base_url: Option<String>,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            environment: Environment::default(),
            api_version: DEFAULT_API_VERSION,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            base_url: None,
        }
    }
}

impl fmt::Debug for PaddleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddleConfig")
            .field("api_key", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("api_version", &self.api_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PaddleConfig {
    /// Create a sandbox configuration for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set the environment.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Select sandbox (`true`) or production (`false`).
    #[must_use]
    pub fn with_test_mode(self, test_mode: bool) -> Self {
        self.with_environment(Environment::from_test_mode(test_mode))
    }

    /// Set the API version sent with every request.
    #[must_use]
    pub fn with_api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Send requests to a custom base URL instead of the environment's.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// The selected environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// The API version pin.
    #[must_use]
    pub const fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Request timeout in seconds.
    #[must_use]
    pub const fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Full URL for an API path such as `/products`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Check that the configuration can authenticate.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty.
    pub fn validate(&self) -> Result<(), PaddleError> {
        if self.api_key.trim().is_empty() {
            return Err(PaddleError::Configuration("Missing Paddle API key".into()));
        }
        Ok(())
    }

    /// Headers sent with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key contains characters not allowed in a
    /// header value.
    pub fn headers(&self) -> Result<HeaderMap, PaddleError> {
        let mut h = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| PaddleError::Configuration("Invalid Authorization header".into()))?;
        auth.set_sensitive(true);
        h.insert(AUTHORIZATION, auth);

        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        h.insert(HDR_PADDLE_VERSION, HeaderValue::from(self.api_version));

        Ok(h)
    }
}
