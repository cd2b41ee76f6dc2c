//! Harness configuration.
//!
//! One reusable client configuration (base URL, timeout, default
//! headers) is injected into the harness instead of building an ad-hoc
//! client per call.

use std::collections::HashMap;

use thiserror::Error;

/// Default backend the scenario catalog targets.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default per-call timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `VIGIL_TIMEOUT_MS` is not a valid millisecond count.
    #[error("invalid timeout value '{0}': must be a positive integer of milliseconds")]
    InvalidTimeout(String),
}

/// Shared configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base URL scenario paths are resolved against.
    pub base_url: String,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
    /// Headers applied to every call; scenario headers take precedence.
    pub default_headers: HashMap<String, String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers: HashMap::new(),
        }
    }
}

impl HarnessConfig {
    /// Builds a configuration from the environment.
    ///
    /// Reads `VIGIL_BASE_URL` and `VIGIL_TIMEOUT_MS`; unset variables
    /// fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] when `VIGIL_TIMEOUT_MS`
    /// is set but not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("VIGIL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_ms = match std::env::var("VIGIL_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url,
            timeout_ms,
            default_headers: HashMap::new(),
        })
    }

    /// Overrides the base URL (builder pattern).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-call timeout (builder pattern).
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Adds a default header (builder pattern).
    #[must_use]
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }
}
