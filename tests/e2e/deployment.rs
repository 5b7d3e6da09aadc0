use crate::common::fake_github::FakeGitHub;
use monaco_themes::config::DeploymentConfig;
use monaco_themes::deployment::{DeploymentError, DeploymentStatusRequest, GitHubClient};
use serde_json::json;

fn client_for(github: &FakeGitHub) -> GitHubClient {
    let config = DeploymentConfig {
        api_url: github.url.clone(),
        user_agent: "monaco-themes-tests".to_string(),
    };
    GitHubClient::new(&config, "ghp_secret")
}

fn request(environment_url: Option<&str>) -> DeploymentStatusRequest {
    DeploymentStatusRequest {
        state: "success".to_string(),
        environment: "production".to_string(),
        environment_url: environment_url.map(str::to_string),
    }
}

#[test]
fn test_sends_single_status_post() {
    let github = FakeGitHub::respond_once(
        201,
        r#"{"id": 12, "state": "success", "environment": "production"}"#,
    );
    let client = client_for(&github);

    let status = client
        .create_deployment_status("octo/site", 4242, &request(Some("https://octo.example.com")))
        .unwrap();
    let captured = github.finish();

    assert_eq!(status.id, 12);
    assert_eq!(status.state, "success");

    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/repos/octo/site/deployments/4242/statuses");
    assert_eq!(captured.header("Authorization"), Some("Bearer ghp_secret"));
    assert_eq!(
        captured.header("Accept"),
        Some("application/vnd.github+json")
    );
    assert_eq!(captured.header("User-Agent"), Some("monaco-themes-tests"));
    assert_eq!(
        captured.json_body(),
        json!({
            "state": "success",
            "environment": "production",
            "environment_url": "https://octo.example.com"
        })
    );
}

#[test]
fn test_body_without_environment_url() {
    let github = FakeGitHub::respond_once(201, r#"{"id": 1, "state": "success"}"#);
    let client = client_for(&github);

    client
        .create_deployment_status("octo/site", 1, &request(None))
        .unwrap();
    let captured = github.finish();

    assert_eq!(
        captured.json_body(),
        json!({"state": "success", "environment": "production"})
    );
}

#[test]
fn test_error_status_reported() {
    let github = FakeGitHub::respond_once(404, r#"{"message": "Not Found"}"#);
    let client = client_for(&github);

    let err = client
        .create_deployment_status("octo/missing", 3, &request(None))
        .unwrap_err();
    github.finish();

    match err {
        DeploymentError::Status { code, body } => {
            assert_eq!(code, 404);
            assert!(body.contains("Not Found"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[test]
fn test_unparseable_response() {
    let github = FakeGitHub::respond_once(201, "ok");
    let client = client_for(&github);

    let err = client
        .create_deployment_status("octo/site", 3, &request(None))
        .unwrap_err();
    github.finish();

    assert!(matches!(err, DeploymentError::InvalidResponse(_)));
}
