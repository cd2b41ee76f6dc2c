//! Canned stub transport.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};

use vigil_application::ports::{HttpClient, HttpClientError};
use vigil_domain::{CallSpec, HttpMethod, Response};

/// A stub implementation of the `HttpClient` port.
///
/// Responses are keyed by method and absolute URL. Every call the stub
/// receives is recorded, so tests can assert on ordering and on calls
/// that must never happen. Unmatched calls yield `ConnectionFailed`.
#[derive(Debug, Default)]
pub struct StubHttpClient {
    responses: HashMap<String, Result<Response, HttpClientError>>,
    calls: Mutex<Vec<String>>,
}

impl StubHttpClient {
    /// Creates an empty stub; every call will fail as unmatched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cans a response for a method/URL pair (builder pattern).
    #[must_use]
    pub fn with_response(mut self, method: HttpMethod, url: &str, response: Response) -> Self {
        self.responses.insert(Self::key(method, url), Ok(response));
        self
    }

    /// Cans a transport error for a method/URL pair (builder pattern).
    #[must_use]
    pub fn with_error(mut self, method: HttpMethod, url: &str, error: HttpClientError) -> Self {
        self.responses.insert(Self::key(method, url), Err(error));
        self
    }

    /// Returns the calls issued so far, as "METHOD url" strings in
    /// issue order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{method} {url}")
    }
}

impl HttpClient for StubHttpClient {
    fn execute(
        &self,
        call: &CallSpec,
    ) -> Pin<Box<dyn Future<Output = Result<Response, HttpClientError>> + Send + '_>> {
        let key = Self::key(call.method, &call.url);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key.clone());

        let result = self.responses.get(&key).cloned().unwrap_or_else(|| {
            Err(HttpClientError::ConnectionFailed(format!(
                "no stubbed response for {key}"
            )))
        });

        Box::pin(async move { result })
    }
}
