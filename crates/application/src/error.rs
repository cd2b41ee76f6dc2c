//! Application error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::ports::HttpClientError;

/// Application-level errors.
///
/// Scenario-level failures never surface here; they are folded into
/// `ScenarioResult`s. These errors cover setup problems only.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The harness configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP transport could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
