//! Publisher integration tests against a mock GitHub API

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitpress_core::Post;
use gitpress_github::{GithubConfig, PublishError, Publisher};

const CONTENTS_PATH: &str = "/repos/octo/blog/contents/content/posts/my-post.md";
const REPO_PATH: &str = "/repos/octo/blog";

fn test_publisher(api_url: &str) -> Publisher {
    let mut config = GithubConfig::new("t0ken", "octo/blog", None).unwrap();
    config.api_url = api_url.to_string();
    Publisher::new(config).unwrap()
}

fn sample_post() -> Post {
    Post {
        title: "My Post".to_string(),
        description: "A post".to_string(),
        content: "Hello.".to_string(),
        date: "2025-06-01T00:00:00Z".parse().unwrap(),
        tags: vec!["crypto".to_string()],
        category: None,
        draft: false,
    }
}

#[tokio::test]
async fn save_new_post_creates_file_without_sha() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"content": {"sha": "newsha"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let publisher = test_publisher(&server.uri());
    let written = publisher.save_post(&sample_post(), true).await.unwrap();
    assert_eq!(written, "content/posts/my-post.md");

    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.to_string() == "PUT")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&put.body).unwrap();

    assert_eq!(body["message"], "feat: My Post");
    assert_eq!(body["branch"], "main");
    assert!(body.get("sha").is_none(), "create must not carry a sha");

    let decoded = BASE64.decode(body["content"].as_str().unwrap()).unwrap();
    let document = String::from_utf8(decoded).unwrap();
    assert!(document.starts_with("+++\n"));
    assert!(document.contains("title = 'My Post'"));
    assert!(document.ends_with("Hello."));
}

#[tokio::test]
async fn save_existing_post_sends_current_sha() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "oldsha",
            "path": "content/posts/my-post.md",
            "size": 42
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .and(body_partial_json(json!({
            "sha": "oldsha",
            "message": "update: My Post"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": {"sha": "newsha"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let publisher = test_publisher(&server.uri());
    publisher.save_post(&sample_post(), false).await.unwrap();
}

#[tokio::test]
async fn save_surfaces_status_text_on_write_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let publisher = test_publisher(&server.uri());
    let err = publisher.save_post(&sample_post(), true).await.unwrap_err();

    match err {
        PublishError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn save_surfaces_conflict_distinctly() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sha": "stale"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let publisher = test_publisher(&server.uri());
    let err = publisher.save_post(&sample_post(), false).await.unwrap_err();
    assert!(matches!(err, PublishError::Conflict { .. }));
}

#[tokio::test]
async fn delete_sends_token_branch_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sha": "cursha"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(CONTENTS_PATH))
        .and(body_partial_json(json!({
            "sha": "cursha",
            "branch": "main",
            "message": "delete: My Post"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"commit": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let publisher = test_publisher(&server.uri());
    let deleted = publisher.delete_post(&sample_post()).await.unwrap();
    assert_eq!(deleted, "content/posts/my-post.md");
}

#[tokio::test]
async fn delete_of_missing_post_is_a_hard_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let publisher = test_publisher(&server.uri());
    let err = publisher.delete_post(&sample_post()).await.unwrap_err();
    assert!(matches!(err, PublishError::FileNotFound { .. }));
}

#[tokio::test]
async fn verify_credentials_answers_per_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "blog"})))
        .mount(&server)
        .await;
    assert!(
        test_publisher(&server.uri())
            .verify_credentials()
            .await
            .unwrap()
    );
    server.reset().await;

    Mock::given(method("GET"))
        .and(path(REPO_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    assert!(
        !test_publisher(&server.uri())
            .verify_credentials()
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn repo_info_parses_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "blog",
            "full_name": "octo/blog",
            "description": "A crypto blog",
            "private": true,
            "default_branch": "main",
            "html_url": "https://github.com/octo/blog"
        })))
        .mount(&server)
        .await;

    let info = test_publisher(&server.uri()).repo_info().await.unwrap();
    assert_eq!(info.name, "blog");
    assert_eq!(info.full_name, "octo/blog");
    assert_eq!(info.description.as_deref(), Some("A crypto blog"));
    assert!(info.private);
    assert_eq!(info.default_branch, "main");
    assert!(info.pushed_at.is_none());
}

#[tokio::test]
async fn repo_info_maps_auth_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPO_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = test_publisher(&server.uri()).repo_info().await.unwrap_err();
    assert!(matches!(err, PublishError::AuthRequired { .. }));
}

#[tokio::test]
async fn requests_carry_auth_and_media_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(REPO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "blog"})))
        .mount(&server)
        .await;

    test_publisher(&server.uri())
        .verify_credentials()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let header = |name: &str| {
        request
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    assert_eq!(header("authorization"), "Bearer t0ken");
    assert_eq!(header("accept"), "application/vnd.github.v3+json");
    assert!(header("user-agent").starts_with("gitpress/"));
}
