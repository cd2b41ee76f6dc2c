//! Response body checks.
//!
//! A [`BodyCheck`] is a structured assertion against a response body:
//! either the whole body as exact text, or a single field of the parsed
//! JSON body addressed by a `$`-rooted path.

use serde::{Deserialize, Serialize};

/// A check to run against a response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyCheck {
    /// Check the body equals the expected text exactly.
    Equals {
        /// Expected body content.
        expected: String,
    },
    /// Check a JSON field addressed by path equals the expected value.
    JsonField {
        /// Path into the parsed body (e.g., "$.id", "$[0].postId").
        path: String,
        /// Expected value (as JSON).
        expected: serde_json::Value,
    },
}

impl BodyCheck {
    /// Creates an exact-text check.
    #[must_use]
    pub fn equals(expected: impl Into<String>) -> Self {
        Self::Equals {
            expected: expected.into(),
        }
    }

    /// Creates a JSON field check.
    #[must_use]
    pub fn json_field(path: impl Into<String>, expected: impl Into<serde_json::Value>) -> Self {
        Self::JsonField {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Get a human-readable description of this check.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Equals { .. } => "Body equals expected text".to_string(),
            Self::JsonField { path, expected } => format!("JSON {path} equals {expected}"),
        }
    }
}
