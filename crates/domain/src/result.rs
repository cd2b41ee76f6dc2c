//! Scenario outcomes and run reports.
//!
//! A [`ScenarioResult`] records what one scenario execution observed and
//! how it was judged; a [`RunReport`] aggregates an ordered run. Both are
//! immutable after creation.

use serde::{Deserialize, Serialize};

/// Why a scenario failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport-level failure: timeout, DNS failure, connection refused.
    NetworkError,
    /// The response arrived with the wrong HTTP status.
    StatusMismatch,
    /// The response body or one of its fields did not match.
    BodyMismatch,
}

impl FailureKind {
    /// Returns the kind as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "NetworkError",
            Self::StatusMismatch => "StatusMismatch",
            Self::BodyMismatch => "BodyMismatch",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a scenario execution was judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Every assertion held.
    Passed,
    /// An assertion failed or the call never completed.
    Failed {
        /// Failure taxonomy tag.
        kind: FailureKind,
        /// Human-readable detail, including expected vs actual.
        message: String,
    },
    /// A dependent scenario whose prerequisite did not pass; no request
    /// was issued.
    Skipped {
        /// Name of the prerequisite that did not pass.
        prerequisite: String,
    },
}

/// The recorded outcome of executing one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name.
    pub scenario: String,
    /// Observed status code, if a response was received.
    pub status: Option<u16>,
    /// Observed response body, if a response was received.
    pub body: Option<String>,
    /// How the execution was judged.
    pub outcome: Outcome,
    /// Execution time in milliseconds (zero for skips).
    pub duration_ms: u64,
}

impl ScenarioResult {
    /// Create a passed result.
    #[must_use]
    pub fn passed(scenario: impl Into<String>, status: u16, body: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            scenario: scenario.into(),
            status: Some(status),
            body: Some(body.into()),
            outcome: Outcome::Passed,
            duration_ms,
        }
    }

    /// Create a failed result for a call that produced a response.
    #[must_use]
    pub fn failed(
        scenario: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
        status: u16,
        body: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            status: Some(status),
            body: Some(body.into()),
            outcome: Outcome::Failed {
                kind,
                message: message.into(),
            },
            duration_ms,
        }
    }

    /// Create a failed result for a call that never completed.
    #[must_use]
    pub fn network_error(scenario: impl Into<String>, message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            scenario: scenario.into(),
            status: None,
            body: None,
            outcome: Outcome::Failed {
                kind: FailureKind::NetworkError,
                message: message.into(),
            },
            duration_ms,
        }
    }

    /// Create a skipped result. No request was issued.
    #[must_use]
    pub fn skipped(scenario: impl Into<String>, prerequisite: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            status: None,
            body: None,
            outcome: Outcome::Skipped {
                prerequisite: prerequisite.into(),
            },
            duration_ms: 0,
        }
    }

    /// Whether the scenario passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }

    /// Whether the scenario failed (skips are not failures).
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }

    /// Whether the scenario was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }
}

/// Results from executing a sequence of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Individual results, in declaration order.
    pub results: Vec<ScenarioResult>,
    /// Total number of scenarios.
    pub total: usize,
    /// Number of passed scenarios.
    pub passed: usize,
    /// Number of failed scenarios.
    pub failed: usize,
    /// Number of skipped scenarios.
    pub skipped: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub duration_ms: u64,
}

impl RunReport {
    /// Create a report from an ordered result list.
    #[must_use]
    pub fn new(results: Vec<ScenarioResult>, duration_ms: u64) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.is_passed()).count();
        let failed = results.iter().filter(|r| r.is_failed()).count();
        let skipped = total - passed - failed;

        Self {
            results,
            total,
            passed,
            failed,
            skipped,
            duration_ms,
        }
    }

    /// True when no non-skipped scenario failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate over executed (non-skipped) scenarios, as a percentage.
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        let executed = self.passed + self.failed;
        if executed == 0 {
            100.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                (self.passed as f64 / executed as f64) * 100.0
            }
        }
    }
}
