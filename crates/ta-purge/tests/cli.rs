//! CLI tests against a mock TubeArchivist instance.

mod common;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli, run_cli_async, stderr, stdout};

async fn mount_videos(server: &MockServer, ids: &[&str]) {
    let data: Vec<_> = ids.iter().map(|id| json!({"youtube_id": id})).collect();
    Mock::given(method("GET"))
        .and(path("/api/video/"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Token test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": data,
            "paginate": {"current_page": 1, "last_page": 1}
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn args(server: &MockServer, extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "--api-key".to_string(),
        "test-key".to_string(),
        "--url".to_string(),
        server.uri(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    args
}

#[test]
fn test_missing_required_flags() {
    let output = run_cli(&["--dry-run"]);

    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("--api-key"));
    assert!(stderr.contains("--url"));
}

#[test]
fn test_invalid_url() {
    let output = run_cli(&["--api-key", "k", "--url", "not a url", "--dry-run"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid --url"));
}

#[tokio::test]
async fn test_dry_run_lists_without_deleting() {
    let server = MockServer::start().await;
    mount_videos(&server, &["v1", "v2"]).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli_async(args(&server, &["--dry-run"])).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("Running in dry run mode. No videos will be deleted."));
    assert!(stdout.contains("[DRY RUN] Would delete video with ID: v1"));
    assert!(stdout.contains("[DRY RUN] Would delete video with ID: v2"));
    assert_eq!(stdout.matches("Would delete video").count(), 2);
}

#[tokio::test]
async fn test_empty_archive() {
    let server = MockServer::start().await;
    mount_videos(&server, &[]).await;

    let output = run_cli_async(args(&server, &["--dry-run"])).await;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No videos found."));
}

#[tokio::test]
async fn test_rejected_listing_exits_cleanly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/video/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(args(&server, &["--dry-run"])).await;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No videos found."));
    let stderr = stderr(&output);
    assert!(stderr.contains("Status code: 403"));
    assert!(stderr.contains("Page: 1"));
}

#[tokio::test]
async fn test_live_run_counts_down_then_deletes() {
    let server = MockServer::start().await;
    mount_videos(&server, &["v1", "v2"]).await;
    Mock::given(method("DELETE"))
        .and(path("/api/video/v1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/video/v2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(args(&server, &[])).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert!(stdout.contains("!!! Running in normal mode. Videos will be deleted. !!!"));
    assert!(stdout.contains("Starting in 5..."));
    assert!(stdout.contains("Starting in 1..."));
    assert!(stdout.contains("Video with ID v1 deleted successfully."));
    assert!(stderr(&output).contains(
        "Failed to delete video with ID v2. Status code: 500, Response: boom"
    ));
}
