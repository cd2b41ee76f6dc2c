//! HTTP client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest
//! library. It handles all real HTTP communication for the harness.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Url};
use vigil_application::ports::{HttpClient, HttpClientError};
use vigil_domain::body::{RequestBody, RequestBodyKind};
use vigil_domain::{CallSpec, HttpMethod, Response};

/// HTTP client implementation using reqwest.
///
/// Wraps a single `reqwest::Client`, created once per harness run. The
/// per-call timeout comes from the `CallSpec`, not the client builder.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled (rustls)
    /// - User-Agent: "Vigil/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("Vigil/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the request body from domain `RequestBody`.
    fn attach_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, HttpClientError> {
        match &body.kind {
            RequestBodyKind::None => Ok(builder),
            RequestBodyKind::Raw { .. } => {
                // Reject syntactically broken JSON before it goes on the wire
                if body
                    .content_type()
                    .is_some_and(|ct| ct.contains("application/json"))
                    && !body.content.is_empty()
                {
                    let _: serde_json::Value = serde_json::from_str(&body.content)
                        .map_err(|e| HttpClientError::InvalidBody(format!("invalid JSON: {e}")))?;
                }
                Ok(builder.body(body.content.clone()))
            }
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError` taxonomy.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();

            if message.to_lowercase().contains("dns") || message.to_lowercase().contains("resolve")
            {
                return HttpClientError::DnsError { host, message };
            }
            if message.to_lowercase().contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error.url().and_then(Url::port_or_known_default).unwrap_or(443),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other("too many redirects".to_string());
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        call: &CallSpec,
    ) -> Pin<Box<dyn Future<Output = Result<Response, HttpClientError>> + Send + '_>> {
        // Clone what we need to move into the async block
        let method = call.method;
        let url = call.url.clone();
        let headers = call.headers.clone();
        let body = call.body.clone();
        let timeout_ms = call.timeout_ms;
        let body_already_typed = call.has_header("content-type");

        Box::pin(async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url)
                .timeout(Duration::from_millis(timeout_ms));

            for (name, value) in &headers {
                builder = builder.header(name, value);
            }

            // Add Content-Type from the body if the call did not set one
            if let Some(content_type) = body.content_type() {
                if !body_already_typed {
                    builder = builder.header("Content-Type", content_type);
                }
            }

            builder = Self::attach_body(builder, &body)?;

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
                .to_vec();

            Ok(Response::new(
                status,
                response_headers,
                body_bytes,
                start.elapsed(),
            ))
        })
    }
}
