//! Scenario runner use case.
//!
//! Executes scenarios against an injected [`HttpClient`] and judges each
//! response into a [`ScenarioResult`]. Execution is sequential and
//! deterministic: scenarios run in declaration order with one request in
//! flight at a time, which is what makes the dependent-pair semantics
//! sound.

use std::collections::HashSet;
use std::time::Instant;

use url::Url;
use vigil_domain::{
    BodyCheck, CallSpec, FailureKind, Response, RunReport, Scenario, ScenarioResult,
};

use crate::config::HarnessConfig;
use crate::ports::HttpClient;

/// The harness: an injected transport plus shared call configuration.
pub struct Harness<C: HttpClient> {
    client: C,
    config: HarnessConfig,
}

impl<C: HttpClient> Harness<C> {
    /// Creates a harness over the given transport and configuration.
    #[must_use]
    pub const fn new(client: C, config: HarnessConfig) -> Self {
        Self { client, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Returns the injected transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Executes one scenario: builds the call, sends it once, judges the
    /// response.
    ///
    /// Transport failures (timeout, DNS, refused connection) are folded
    /// into a failed result tagged `NetworkError`; nothing propagates as
    /// a fault. Zero retries.
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioResult {
        let start = Instant::now();

        let call = match self.build_call(scenario) {
            Ok(call) => call,
            Err(message) => {
                return ScenarioResult::network_error(&scenario.name, message, 0);
            }
        };

        tracing::info!(scenario = %scenario.name, method = %call.method, url = %call.url, "running scenario");

        match self.client.execute(&call).await {
            Ok(response) => {
                let duration_ms = elapsed_ms(start);
                judge(scenario, &response, duration_ms)
            }
            Err(error) => {
                let duration_ms = elapsed_ms(start);
                tracing::warn!(scenario = %scenario.name, %error, "transport failure");
                ScenarioResult::network_error(&scenario.name, error.to_string(), duration_ms)
            }
        }
    }

    /// Executes scenarios in declaration order and aggregates a report.
    ///
    /// Independent failures never short-circuit the run. A scenario
    /// whose `requires` prerequisite has not passed earlier in this run
    /// is recorded as skipped without issuing a request.
    pub async fn run_all(&self, scenarios: &[Scenario]) -> RunReport {
        let start = Instant::now();
        let mut results = Vec::with_capacity(scenarios.len());
        let mut passed: HashSet<&str> = HashSet::new();

        for scenario in scenarios {
            if let Some(prerequisite) = &scenario.requires {
                if !passed.contains(prerequisite.as_str()) {
                    tracing::warn!(
                        scenario = %scenario.name,
                        prerequisite = %prerequisite,
                        "prerequisite did not pass, skipping"
                    );
                    results.push(ScenarioResult::skipped(&scenario.name, prerequisite));
                    continue;
                }
            }

            let result = self.run_scenario(scenario).await;
            if result.is_passed() {
                passed.insert(scenario.name.as_str());
            }
            results.push(result);
        }

        RunReport::new(results, elapsed_ms(start))
    }

    /// Resolves a scenario into a transport-ready call.
    fn build_call(&self, scenario: &Scenario) -> Result<CallSpec, String> {
        let base = Url::parse(&self.config.base_url)
            .map_err(|e| format!("invalid base URL '{}': {e}", self.config.base_url))?;
        let url = base
            .join(&scenario.path)
            .map_err(|e| format!("invalid path '{}': {e}", scenario.path))?;

        let mut headers = self.config.default_headers.clone();
        headers.extend(scenario.headers.clone());

        Ok(CallSpec {
            method: scenario.method,
            url: url.into(),
            headers,
            body: scenario.body.clone(),
            timeout_ms: self.config.timeout_ms,
        })
    }
}

/// Compares a response against a scenario's expectations.
fn judge(scenario: &Scenario, response: &Response, duration_ms: u64) -> ScenarioResult {
    if response.status != scenario.expected_status {
        return ScenarioResult::failed(
            &scenario.name,
            FailureKind::StatusMismatch,
            format!(
                "expected status {}, got {}",
                scenario.expected_status, response.status
            ),
            response.status,
            &response.body,
            duration_ms,
        );
    }

    for check in &scenario.checks {
        if let Err(detail) = evaluate_check(check, response) {
            return ScenarioResult::failed(
                &scenario.name,
                FailureKind::BodyMismatch,
                format!("{}: {detail}", check.description()),
                response.status,
                &response.body,
                duration_ms,
            );
        }
    }

    ScenarioResult::passed(&scenario.name, response.status, &response.body, duration_ms)
}

/// Evaluates a single body check, returning expected-vs-actual detail on
/// mismatch.
fn evaluate_check(check: &BodyCheck, response: &Response) -> Result<(), String> {
    match check {
        BodyCheck::Equals { expected } => {
            if &response.body == expected {
                Ok(())
            } else {
                Err(format!(
                    "expected {expected:?}, got {:?}",
                    preview(&response.body)
                ))
            }
        }
        BodyCheck::JsonField { path, expected } => {
            // Only parse when the content type says the body is JSON
            if !response.is_json() {
                return Err(format!(
                    "content-type '{}' does not indicate JSON",
                    response.content_type.as_deref().unwrap_or("<none>")
                ));
            }
            let json = serde_json::from_str::<serde_json::Value>(&response.body)
                .map_err(|e| format!("failed to parse body as JSON: {e}"))?;

            match lookup_json_path(&json, path)? {
                Some(actual) if actual == expected => Ok(()),
                Some(actual) => Err(format!("expected {expected}, got {actual}")),
                None => Err(format!("path '{path}' not found in body")),
            }
        }
    }
}

/// Trims long bodies for failure messages.
fn preview(body: &str) -> String {
    const MAX: usize = 100;
    if body.len() > MAX {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

/// Looks up a value by a `$`-rooted path.
/// Supports: `$.field`, `$.field.nested`, `$.array[0]`, `$[0].field`.
fn lookup_json_path<'a>(
    json: &'a serde_json::Value,
    path: &str,
) -> Result<Option<&'a serde_json::Value>, String> {
    let path = path.trim();
    let Some(rest) = path.strip_prefix('$') else {
        return Err(format!("JSON path '{path}' must start with '$'"));
    };
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    if rest.is_empty() {
        return Ok(Some(json));
    }

    let mut current = json;
    for segment in split_segments(rest) {
        if let Some((name, index)) = parse_index_access(&segment) {
            if !name.is_empty() {
                match current.get(name) {
                    Some(v) => current = v,
                    None => return Ok(None),
                }
            }
            let idx: usize = index
                .parse()
                .map_err(|_| format!("invalid array index '{index}' in path"))?;
            match current.get(idx) {
                Some(v) => current = v,
                None => return Ok(None),
            }
        } else {
            match current.get(&segment) {
                Some(v) => current = v,
                None => return Ok(None),
            }
        }
    }

    Ok(Some(current))
}

/// Splits a path into segments, respecting array brackets.
fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for ch in path.chars() {
        match ch {
            '.' if !in_bracket => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                in_bracket = true;
                current.push(ch);
            }
            ']' => {
                in_bracket = false;
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Parses array access like `field[0]` into `("field", "0")`.
fn parse_index_access(segment: &str) -> Option<(&str, &str)> {
    let bracket_start = segment.find('[')?;
    if !segment.ends_with(']') {
        return None;
    }
    Some((
        &segment[..bracket_start],
        &segment[bracket_start + 1..segment.len() - 1],
    ))
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
