//! The blocking client shares validation and error mapping with the async one.

use super::mock_server::{classify_response, TEST_API_KEY};
use classifai::blocking::ClassifAiClient;
use classifai::{ClassifyOptions, Error};
use mockito::{Matcher, Server};
use serde_json::json;

fn client(url: String) -> ClassifAiClient {
    ClassifAiClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(url)
        .build_blocking()
        .expect("client")
}

#[test]
fn test_blocking_classify() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/classify")
        .match_header("authorization", "Bearer test-key-123")
        .match_body(Matcher::PartialJson(json!({"labels": ["a", "b"]})))
        .with_status(200)
        .with_body(classify_response("b", &[("a", 0.25), ("b", 0.75)]).to_string())
        .create();

    let result = client(server.url())
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .expect("classify");

    mock.assert();
    assert_eq!(result.label, "b");
}

#[test]
fn test_blocking_validation_sends_nothing() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/classify").expect(0).create();

    let err = client(server.url())
        .classify("hello", ClassifyOptions::new())
        .unwrap_err();

    assert!(matches!(err, Error::Validation { status: None, .. }));
    mock.assert();
}

#[test]
fn test_blocking_rate_limit_and_not_found() {
    let mut server = Server::new();
    let _feedback = server
        .mock("POST", "/feedback")
        .with_status(429)
        .with_header("retry-after", "5")
        .with_body(r#"{"error":"Rate limit exceeded"}"#)
        .create();
    let _stats = server
        .mock("GET", "/projects/nope/stats")
        .with_status(404)
        .with_body(r#"{"detail":"Project not found"}"#)
        .create();

    let client = client(server.url());

    let err = client.submit_feedback("det_1", "spam").unwrap_err();
    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_ms: Some(5000),
            ..
        }
    ));

    let err = client.get_project_stats("nope").unwrap_err();
    assert!(matches!(err, Error::NotFound { status: 404, .. }));
}

#[test]
fn test_blocking_url_content_is_fetched_without_credentials() {
    let mut server = Server::new();
    let image = server
        .mock("GET", "/img.png")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(b"png-bytes")
        .create();
    let classify = server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "image", "content": "cG5nLWJ5dGVz"}]
        })))
        .with_status(200)
        .with_body(classify_response("a", &[("a", 0.9), ("b", 0.1)]).to_string())
        .create();

    let url = format!("{}/img.png", server.url());
    client(server.url())
        .classify(url, ClassifyOptions::new().labels(["a", "b"]))
        .expect("classify");

    image.assert();
    classify.assert();
}
