//! Fixed scenario catalog.
//!
//! The smoke suite run against the JSONPlaceholder backend. The data is
//! deliberately literal: expected bodies are the exact pretty-printed
//! text the backend returns, and the create-then-delete pair reproduces
//! the observed behavior of issuing a PUT before the DELETE (the backend
//! does not persist mutations, so the "create" is a stand-in).

use vigil_domain::{BodyCheck, HttpMethod, RequestBody, Scenario};

/// Builds the scenario catalog, in declaration order.
///
/// Order matters: `delete_post_9` depends on `replace_post_9` and must
/// come after it within the same run.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario::new("get_posts", HttpMethod::Get, "/posts", 200),
        Scenario::new("get_misspelled_path", HttpMethod::Get, "/post", 404),
        Scenario::new("patch_unsupported", HttpMethod::Patch, "/posts", 404),
        Scenario::new("post_without_body", HttpMethod::Post, "/posts", 201)
            .with_check(BodyCheck::equals("{\n  \"id\": 101\n}")),
        Scenario::new("put_existing_post", HttpMethod::Put, "/posts/7", 200)
            .with_check(BodyCheck::equals("{\n  \"id\": 7\n}")),
        Scenario::new("put_non_numeric_id", HttpMethod::Put, "/posts/agh", 500),
        Scenario::new("replace_post_9", HttpMethod::Put, "/posts/9", 200),
        Scenario::new("delete_post_9", HttpMethod::Delete, "/posts/9", 200)
            .with_requires("replace_post_9"),
        Scenario::new(
            "post_comment_under_post",
            HttpMethod::Post,
            "/posts/9/comments",
            201,
        )
        .with_header("Content-Type", "application/json")
        .with_body(RequestBody::json(
            r#"{"id": 1, "title": "foo", "body": "bar", "userId": 1}"#,
        ))
        .with_check(BodyCheck::json_field("$.id", 501))
        .with_check(BodyCheck::json_field("$.title", "foo"))
        .with_check(BodyCheck::json_field("$.body", "bar"))
        .with_check(BodyCheck::json_field("$.userId", 1))
        .with_check(BodyCheck::json_field("$.postId", 9)),
        Scenario::new(
            "get_comments_filtered",
            HttpMethod::Get,
            "/comments?postId=12",
            200,
        )
        .with_check(BodyCheck::json_field("$[0].postId", 12)),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_names_are_unique() {
        let scenarios = catalog();
        let names: HashSet<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn test_dependent_pair_ordering() {
        let scenarios = catalog();
        let put = scenarios
            .iter()
            .position(|s| s.name == "replace_post_9")
            .unwrap_or(usize::MAX);
        let delete = scenarios
            .iter()
            .position(|s| s.name == "delete_post_9")
            .unwrap_or(usize::MAX);

        assert!(put < delete, "prerequisite must be declared first");
        assert_eq!(
            scenarios[delete].requires.as_deref(),
            Some("replace_post_9")
        );
        // The first call of the pair is deliberately a PUT.
        assert_eq!(scenarios[put].method, HttpMethod::Put);
        assert_eq!(scenarios[delete].method, HttpMethod::Delete);
    }

    #[test]
    fn test_only_the_delete_is_dependent() {
        let dependents: Vec<_> = catalog().into_iter().filter(Scenario::is_dependent).collect();
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].name, "delete_post_9");
    }

    #[test]
    fn test_comment_post_carries_json_body_and_field_checks() {
        let scenarios = catalog();
        let scenario = scenarios
            .iter()
            .find(|s| s.name == "post_comment_under_post")
            .unwrap_or_else(|| unreachable!("catalog is fixed"));

        assert_eq!(scenario.body.content_type(), Some("application/json"));
        assert!(scenario
            .checks
            .contains(&BodyCheck::json_field("$.postId", json!(9))));
        assert!(scenario
            .checks
            .contains(&BodyCheck::json_field("$.id", json!(501))));
    }

    #[test]
    fn test_expected_statuses() {
        let expected: Vec<(&str, u16)> = vec![
            ("get_posts", 200),
            ("get_misspelled_path", 404),
            ("patch_unsupported", 404),
            ("post_without_body", 201),
            ("put_existing_post", 200),
            ("put_non_numeric_id", 500),
            ("replace_post_9", 200),
            ("delete_post_9", 200),
            ("post_comment_under_post", 201),
            ("get_comments_filtered", 200),
        ];
        let scenarios = catalog();
        let actual: Vec<(&str, u16)> = scenarios
            .iter()
            .map(|s| (s.name.as_str(), s.expected_status))
            .collect();
        assert_eq!(actual, expected);
    }
}
