//! Status code to error kind mapping. Nothing is retried.

use crate::integration::mock_server::{classify_response, MockApi};
use classifai::error_code::ErrorCode;
use classifai::{ClassifyOptions, Error};
use serde_json::json;

async fn classify_with_status(status: usize, body: serde_json::Value) -> Error {
    let mut api = MockApi::start().await;
    let mock = api.mock_json("POST", "/classify", status, body).await;

    let err = api
        .client()
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    // expect(1) on the mock: a single attempt, no retry.
    mock.assert_async().await;
    err
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let err = classify_with_status(401, json!({"error": "Invalid API key"})).await;
    match &err {
        Error::Authentication { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
    assert_eq!(err.code(), ErrorCode::Authentication);
}

#[tokio::test]
async fn test_forbidden_maps_to_authentication() {
    let err = classify_with_status(403, json!({"error": "Forbidden"})).await;
    assert!(matches!(err, Error::Authentication { status: 403, .. }));
    assert_eq!(err.code(), ErrorCode::PermissionDenied);
}

#[tokio::test]
async fn test_bad_request_maps_to_validation() {
    let err = classify_with_status(400, json!({"error": "Invalid labels"})).await;
    assert!(matches!(err, Error::Validation { status: Some(400), .. }));
    assert!(err.is_remote());

    let err = classify_with_status(422, json!({"detail": [{"loc": ["body", "content"]}]})).await;
    assert!(matches!(err, Error::Validation { status: Some(422), .. }));
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let err = classify_with_status(500, json!({"error": "Internal error"})).await;
    match &err {
        Error::Api { status, message } => {
            assert_eq!(*status, Some(500));
            assert_eq!(message, "Internal error");
        }
        other => panic!("expected Api, got {other:?}"),
    }
    assert!(err.code().retryable());

    let err = classify_with_status(503, json!({})).await;
    assert_eq!(err.code(), ErrorCode::Overloaded);
}

#[tokio::test]
async fn test_unexpected_response_shape_is_api_error() {
    let mut api = MockApi::start().await;
    let _mock = api
        .mock_json("POST", "/classify", 200, json!({"result": "a"}))
        .await;

    let err = api
        .client()
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api { status: Some(200), .. }), "{err:?}");
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let mut api = MockApi::start().await;
    let _mock = api
        .server
        .mock("POST", "/classify")
        .with_status(502)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = api
        .client()
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("upstream unavailable"), "{err}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = classifai::ClassifAiClient::builder()
        .anonymous()
        .base_url(url)
        .build()
        .unwrap();
    let err = client
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "{err:?}");
    assert!(err.is_remote());
}

#[tokio::test]
async fn test_success_after_error_on_same_client() {
    let mut api = MockApi::start().await;
    let client = api.client();

    let _fail = api.mock_json("GET", "/health", 503, json!({})).await;
    assert!(client.health_check().await.is_err());

    let _ok = api
        .mock_json("POST", "/classify", 200, classify_response("a", &[("a", 0.5), ("b", 0.5)]))
        .await;
    let result = client
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .await
        .expect("classify");
    assert_eq!(result.label, "a");
}
