//! Scenario definitions.
//!
//! A scenario is one HTTP-call-and-assert unit: the request to build,
//! the status it must return, and any body checks. Scenarios are static
//! test data; the harness never mutates them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::body::RequestBody;
use crate::check::BodyCheck;
use crate::method::HttpMethod;

/// One HTTP-call-and-assert unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Unique scenario name.
    pub name: String,
    /// HTTP method to issue.
    pub method: HttpMethod,
    /// Target path relative to the base URL; may carry a query string.
    pub path: String,
    /// Request headers.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body, if any.
    #[serde(default)]
    pub body: RequestBody,
    /// Expected HTTP status code.
    pub expected_status: u16,
    /// Checks to run against the response body.
    #[serde(default)]
    pub checks: Vec<BodyCheck>,
    /// Name of a prerequisite scenario that must have passed earlier in
    /// the same run. If it did not, this scenario is skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
}

impl Scenario {
    /// Creates a new scenario with no headers, body, or checks.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>, expected_status: u16) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: RequestBody::none(),
            expected_status,
            checks: Vec::new(),
            requires: None,
        }
    }

    /// Sets a request header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Adds a body check (builder pattern).
    #[must_use]
    pub fn with_check(mut self, check: BodyCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Marks this scenario as dependent on an earlier one.
    #[must_use]
    pub fn with_requires(mut self, prerequisite: impl Into<String>) -> Self {
        self.requires = Some(prerequisite.into());
        self
    }

    /// Returns true if this scenario depends on another.
    #[must_use]
    pub const fn is_dependent(&self) -> bool {
        self.requires.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("post_comment", HttpMethod::Post, "/posts/9/comments", 201)
            .with_header("Content-Type", "application/json")
            .with_body(RequestBody::json(r#"{"title": "foo"}"#))
            .with_check(BodyCheck::json_field("$.id", 501));

        assert_eq!(scenario.name, "post_comment");
        assert_eq!(scenario.checks.len(), 1);
        assert!(scenario.headers.contains_key("Content-Type"));
        assert!(!scenario.is_dependent());
    }

    #[test]
    fn test_dependent_scenario() {
        let scenario = Scenario::new("delete_post_9", HttpMethod::Delete, "/posts/9", 200)
            .with_requires("replace_post_9");

        assert!(scenario.is_dependent());
        assert_eq!(scenario.requires.as_deref(), Some("replace_post_9"));
    }
}
