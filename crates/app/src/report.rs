//! Plain-text report rendering.
//!
//! One line per scenario, then a summary line. Failure lines carry the
//! taxonomy tag and expected-vs-actual detail so a failed run can be
//! diagnosed from the output alone.

use vigil_domain::{Outcome, RunReport, StatusCode};

/// Renders a run report as human-readable text.
#[must_use]
pub fn render(report: &RunReport) -> String {
    let mut out = String::new();

    for result in &report.results {
        let line = match &result.outcome {
            Outcome::Passed => format!(
                "PASS {} ({}, {} ms)\n",
                result.scenario,
                status_display(result.status),
                result.duration_ms
            ),
            Outcome::Failed { kind, message } => format!(
                "FAIL {} [{kind}] {message}\n",
                result.scenario
            ),
            Outcome::Skipped { prerequisite } => format!(
                "SKIP {} (prerequisite '{prerequisite}' did not pass)\n",
                result.scenario
            ),
        };
        out.push_str(&line);
    }

    out.push_str(&format!(
        "\n{} passed, {} failed, {} skipped in {} ms\n",
        report.passed, report.failed, report.skipped, report.duration_ms
    ));

    out
}

fn status_display(status: Option<u16>) -> String {
    status.map_or_else(|| "no response".to_string(), |s| StatusCode::new(s).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vigil_domain::{FailureKind, ScenarioResult};

    use super::*;

    #[test]
    fn test_render_mixed_outcomes() {
        let report = RunReport::new(
            vec![
                ScenarioResult::passed("get_posts", 200, "[]", 42),
                ScenarioResult::failed(
                    "replace_post_9",
                    FailureKind::StatusMismatch,
                    "expected status 200, got 503",
                    503,
                    "",
                    17,
                ),
                ScenarioResult::skipped("delete_post_9", "replace_post_9"),
            ],
            61,
        );

        let text = render(&report);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "PASS get_posts (200 OK, 42 ms)");
        assert_eq!(
            lines[1],
            "FAIL replace_post_9 [StatusMismatch] expected status 200, got 503"
        );
        assert_eq!(
            lines[2],
            "SKIP delete_post_9 (prerequisite 'replace_post_9' did not pass)"
        );
        assert_eq!(lines[4], "1 passed, 1 failed, 1 skipped in 61 ms");
    }

    #[test]
    fn test_network_error_renders_without_status() {
        let report = RunReport::new(
            vec![ScenarioResult::network_error(
                "get_posts",
                "request timed out after 10000 ms",
                10_000,
            )],
            10_000,
        );

        let text = render(&report);
        assert!(text.contains("FAIL get_posts [NetworkError] request timed out after 10000 ms"));
        assert!(text.contains("0 passed, 1 failed, 0 skipped"));
    }
}
