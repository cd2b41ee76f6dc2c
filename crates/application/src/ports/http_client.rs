//! HTTP client port.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;
use vigil_domain::{CallSpec, Response};

/// Errors an HTTP transport can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body is malformed for its content type.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that expired, in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error detail.
        message: String,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Remote host.
        host: String,
        /// Remote port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport error.
    #[error("HTTP client error: {0}")]
    Other(String),
}

/// Port for issuing HTTP calls.
///
/// The harness depends on this trait rather than a concrete transport,
/// so a canned stub can stand in for the network in offline runs.
pub trait HttpClient: Send + Sync {
    /// Issues one HTTP call and captures the response.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpClientError`] when the call cannot be built or
    /// does not complete. Non-2xx statuses are not errors; they come
    /// back as a normal [`Response`].
    fn execute(
        &self,
        call: &CallSpec,
    ) -> Pin<Box<dyn Future<Output = Result<Response, HttpClientError>> + Send + '_>>;
}
