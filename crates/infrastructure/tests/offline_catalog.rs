//! Full-catalog harness runs against the stub transport.
//!
//! These tests wire the real runner and the real catalog to canned
//! responses shaped like the JSONPlaceholder backend, so the whole
//! pipeline is exercised without network access.

use std::collections::HashMap;
use std::time::Duration;

use pretty_assertions::assert_eq;
use vigil_application::{catalog, Harness, HarnessConfig};
use vigil_domain::{HttpMethod, Outcome, Response};
use vigil_infrastructure::StubHttpClient;

const BASE: &str = "https://stub.test";

fn text_response(status: u16, body: &str) -> Response {
    Response::new(
        status,
        HashMap::new(),
        body.as_bytes().to_vec(),
        Duration::from_millis(3),
    )
}

fn json_response(status: u16, body: &str) -> Response {
    let mut headers = HashMap::new();
    headers.insert(
        "Content-Type".to_string(),
        "application/json; charset=utf-8".to_string(),
    );
    Response::new(
        status,
        headers,
        body.as_bytes().to_vec(),
        Duration::from_millis(3),
    )
}

/// Stub behaving like the backend on a good day.
fn nominal_stub() -> StubHttpClient {
    StubHttpClient::new()
        .with_response(
            HttpMethod::Get,
            &format!("{BASE}/posts"),
            json_response(200, r#"[{"userId": 1, "id": 1, "title": "t", "body": "b"}]"#),
        )
        .with_response(HttpMethod::Get, &format!("{BASE}/post"), json_response(404, "{}"))
        .with_response(
            HttpMethod::Patch,
            &format!("{BASE}/posts"),
            json_response(404, "{}"),
        )
        .with_response(
            HttpMethod::Post,
            &format!("{BASE}/posts"),
            json_response(201, "{\n  \"id\": 101\n}"),
        )
        .with_response(
            HttpMethod::Put,
            &format!("{BASE}/posts/7"),
            json_response(200, "{\n  \"id\": 7\n}"),
        )
        .with_response(
            HttpMethod::Put,
            &format!("{BASE}/posts/agh"),
            text_response(500, ""),
        )
        .with_response(
            HttpMethod::Put,
            &format!("{BASE}/posts/9"),
            json_response(200, "{\n  \"id\": 9\n}"),
        )
        .with_response(
            HttpMethod::Delete,
            &format!("{BASE}/posts/9"),
            json_response(200, "{}"),
        )
        .with_response(
            HttpMethod::Post,
            &format!("{BASE}/posts/9/comments"),
            json_response(
                201,
                r#"{"id": 501, "title": "foo", "body": "bar", "userId": 1, "postId": 9}"#,
            ),
        )
        .with_response(
            HttpMethod::Get,
            &format!("{BASE}/comments?postId=12"),
            json_response(
                200,
                r#"[{"postId": 12, "id": 56, "name": "n", "email": "e@example.com", "body": "b"}]"#,
            ),
        )
}

fn harness(stub: StubHttpClient) -> Harness<StubHttpClient> {
    Harness::new(stub, HarnessConfig::default().with_base_url(BASE))
}

#[tokio::test]
async fn nominal_run_passes_every_scenario() {
    let harness = harness(nominal_stub());
    let report = harness.run_all(&catalog()).await;

    for result in &report.results {
        assert_eq!(
            result.outcome,
            Outcome::Passed,
            "scenario {} did not pass",
            result.scenario
        );
    }
    assert_eq!(report.total, 10);
    assert_eq!(report.passed, 10);
    assert!(report.all_passed());
}

#[tokio::test]
async fn nominal_run_issues_calls_in_declaration_order() {
    let scenarios = catalog();
    let harness = harness(nominal_stub());
    let _report = harness.run_all(&scenarios).await;

    let expected: Vec<String> = vec![
        format!("GET {BASE}/posts"),
        format!("GET {BASE}/post"),
        format!("PATCH {BASE}/posts"),
        format!("POST {BASE}/posts"),
        format!("PUT {BASE}/posts/7"),
        format!("PUT {BASE}/posts/agh"),
        format!("PUT {BASE}/posts/9"),
        format!("DELETE {BASE}/posts/9"),
        format!("POST {BASE}/posts/9/comments"),
        format!("GET {BASE}/comments?postId=12"),
    ];
    assert_eq!(harness.client().calls(), expected);
}

#[tokio::test]
async fn failed_prerequisite_skips_the_delete() {
    // Degrade only the PUT half of the pair.
    let stub = nominal_stub().with_response(
        HttpMethod::Put,
        &format!("{BASE}/posts/9"),
        text_response(503, ""),
    );
    let harness = harness(stub);
    let report = harness.run_all(&catalog()).await;

    let replace = result_for(&report.results, "replace_post_9");
    let delete = result_for(&report.results, "delete_post_9");

    assert!(replace.is_failed());
    assert_eq!(
        delete.outcome,
        Outcome::Skipped {
            prerequisite: "replace_post_9".to_string()
        }
    );
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.passed, 8);
    assert!(!report.all_passed());
}

#[tokio::test]
async fn read_only_scenarios_are_idempotent() {
    let read_only: Vec<_> = catalog().into_iter().take(3).collect();

    let first = harness(nominal_stub()).run_all(&read_only).await;
    let second = harness(nominal_stub()).run_all(&read_only).await;

    let observable = |report: &vigil_domain::RunReport| -> Vec<(String, Option<u16>, Outcome)> {
        report
            .results
            .iter()
            .map(|r| (r.scenario.clone(), r.status, r.outcome.clone()))
            .collect()
    };
    assert_eq!(observable(&first), observable(&second));
}

#[tokio::test]
async fn non_numeric_id_is_judged_against_500_only() {
    // Backend answering 200 here must produce a StatusMismatch against
    // the documented 500 expectation.
    let stub = nominal_stub().with_response(
        HttpMethod::Put,
        &format!("{BASE}/posts/agh"),
        json_response(200, "{}"),
    );
    let harness = harness(stub);
    let report = harness.run_all(&catalog()).await;

    let result = result_for(&report.results, "put_non_numeric_id");
    match &result.outcome {
        Outcome::Failed { kind, message } => {
            assert_eq!(*kind, vigil_domain::FailureKind::StatusMismatch);
            assert!(message.contains("expected status 500"));
        }
        other => panic!("expected a status mismatch, got {other:?}"),
    }
}

fn result_for<'a>(
    results: &'a [vigil_domain::ScenarioResult],
    name: &str,
) -> &'a vigil_domain::ScenarioResult {
    results
        .iter()
        .find(|r| r.scenario == name)
        .unwrap_or_else(|| panic!("no result for scenario {name}"))
}
