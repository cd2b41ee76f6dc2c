//! Resolved outgoing request specification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::body::RequestBody;
use crate::method::HttpMethod;

/// A fully resolved HTTP call, ready to hand to a transport.
///
/// Unlike a [`crate::Scenario`], which carries a relative path and
/// expectations, a `CallSpec` holds the absolute URL and everything the
/// transport needs to put a request on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSpec {
    /// HTTP method to use.
    pub method: HttpMethod,
    /// Absolute URL, including any query string.
    pub url: String,
    /// Request headers as a map.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body, if any.
    #[serde(default)]
    pub body: RequestBody,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
}

impl CallSpec {
    /// Creates a call with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: RequestBody::none(),
            timeout_ms,
        }
    }

    /// Returns true if a header with the given name is present
    /// (case-insensitive).
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.keys().any(|k| k.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_header_is_case_insensitive() {
        let mut call = CallSpec::new(HttpMethod::Post, "https://example.com/posts", 10_000);
        call.headers
            .insert("Content-Type".to_string(), "application/json".to_string());

        assert!(call.has_header("content-type"));
        assert!(call.has_header("CONTENT-TYPE"));
        assert!(!call.has_header("accept"));
    }
}
