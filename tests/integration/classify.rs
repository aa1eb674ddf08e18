//! Classification round trips: request shape, auth header and content normalization.

use crate::integration::mock_server::{classify_response, silent_listener, MockApi, TEST_API_KEY};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use classifai::error_code::ErrorCode;
use classifai::{ClassifAiClient, ClassifyOptions, ContentItem, Error};
use mockito::Matcher;
use serde_json::json;
use std::io::Write;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_classify_text_with_labels() {
    let mut api = MockApi::start().await;
    let mock = api
        .server
        .mock("POST", "/classify")
        .match_header("authorization", format!("Bearer {TEST_API_KEY}").as_str())
        .match_header("x-request-id", Matcher::Regex("^[0-9a-f-]{36}$".into()))
        .match_body(Matcher::Json(json!({
            "content": [{"type": "text", "content": "hello"}],
            "labels": ["a", "b"],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(classify_response("a", &[("a", 0.7), ("b", 0.3)]).to_string())
        .create_async()
        .await;

    let result = api
        .client()
        .classify("hello", ClassifyOptions::new().labels(["a", "b"]))
        .await
        .expect("classify");

    mock.assert_async().await;
    assert!(result.label == "a" || result.label == "b");
    let total: f64 = result.labels.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "scores sum to {total}");
    assert_eq!(result.detection_id, "det_123");
    assert_eq!(result.project_id, "proj_abc");
    assert_eq!(result.confidence(), Some(0.7));
    assert_eq!(result.ranked()[0], ("a", 0.7));
}

#[tokio::test]
async fn test_anonymous_client_sends_no_credentials() {
    let mut api = MockApi::start().await;
    let mock = api
        .server
        .mock("POST", "/classify")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(classify_response("ham", &[("spam", 0.1), ("ham", 0.9)]).to_string())
        .create_async()
        .await;

    let result = api
        .anonymous_client()
        .classify("buy now", ClassifyOptions::new().labels(["spam", "ham"]))
        .await
        .expect("classify");

    mock.assert_async().await;
    assert_eq!(result.label, "ham");
}

#[tokio::test]
async fn test_description_only_request_omits_labels() {
    let mut api = MockApi::start().await;
    let mock = api
        .server
        .mock("POST", "/classify")
        .match_body(Matcher::Json(json!({
            "content": [{"type": "text", "content": "The pasta was cold"}],
            "description": "Restaurant reviews",
        })))
        .with_status(200)
        .with_body(
            json!({
                "label": "negative",
                "labels": {"positive": 0.05, "negative": 0.9, "neutral": 0.05},
                "detection_id": "det_9",
                "project_id": "proj_new",
                "labels_used": ["positive", "negative", "neutral"],
                "model_used": "classifai-v1",
                "processing_time_ms": 120.5
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = api
        .client()
        .classify(
            "The pasta was cold",
            ClassifyOptions::new().description("Restaurant reviews"),
        )
        .await
        .expect("classify");

    mock.assert_async().await;
    assert_eq!(
        result.labels_used.as_deref(),
        Some(&["positive".to_string(), "negative".to_string(), "neutral".to_string()][..])
    );
    assert_eq!(result.processing_time_ms, Some(120.5));
}

#[tokio::test]
async fn test_project_id_alone_is_enough() {
    let mut api = MockApi::start().await;
    let mock = api
        .server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({"project_id": "proj_abc"})))
        .with_status(200)
        .with_body(classify_response("x", &[("x", 0.6), ("y", 0.4)]).to_string())
        .create_async()
        .await;

    api.client()
        .classify("again", ClassifyOptions::new().project_id("proj_abc"))
        .await
        .expect("classify");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_labels_fails_before_request() {
    let mut api = MockApi::start().await;
    let mock = api.forbid_classify().await;

    let err = api
        .client()
        .classify("hello", ClassifyOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { status: None, .. }), "{err:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_too_many_labels_fails_before_request() {
    let mut api = MockApi::start().await;
    let mock = api.forbid_classify().await;
    let labels: Vec<String> = (0..51).map(|i| format!("label_{i}")).collect();

    let err = api
        .client()
        .classify("hello", ClassifyOptions::new().labels(labels))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { status: None, .. }), "{err:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_single_label_fails_before_request() {
    let mut api = MockApi::start().await;
    let mock = api.forbid_classify().await;

    let err = api
        .client()
        .classify("hello", ClassifyOptions::new().labels(["only"]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_content_fails_before_request() {
    let mut api = MockApi::start().await;
    let mock = api.forbid_classify().await;

    let err = api
        .client()
        .classify(Vec::<String>::new(), ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_mixed_content_is_normalized_in_order() {
    let mut api = MockApi::start().await;
    let image_bytes = b"\x89PNG\r\n\x1a\nfake-image".to_vec();
    let remote_bytes = b"remote-image-bytes".to_vec();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&image_bytes).unwrap();
    let path = file.path().to_string_lossy().to_string();
    let remote_url = format!("{}/images/cat.png", api.url());

    let image_mock = api.mock_image("/images/cat.png", &remote_bytes).await;
    let classify_mock = api
        .server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [
                {"type": "text", "content": "Ticket text"},
                {"type": "image", "content": STANDARD.encode(&image_bytes)},
                {"type": "image", "content": STANDARD.encode(&remote_bytes)},
                {"type": "image", "content": "cHJlYnVpbHQ="},
                {"type": "text", "content": "/definitely/not/a/file.png"},
            ]
        })))
        .with_status(200)
        .with_body(classify_response("bug", &[("bug", 0.8), ("question", 0.2)]).to_string())
        .create_async()
        .await;

    let content = classifai::Content::new()
        .push("Ticket text")
        .push(path.as_str())
        .push(remote_url.as_str())
        .push(ContentItem::image_base64("cHJlYnVpbHQ="))
        .push("/definitely/not/a/file.png");

    let result = api
        .client()
        .classify(content, ClassifyOptions::new().labels(["bug", "question"]))
        .await
        .expect("classify");

    image_mock.assert_async().await;
    classify_mock.assert_async().await;
    assert_eq!(result.label, "bug");
}

#[tokio::test]
async fn test_failed_download_is_content_fetch_error() {
    let mut api = MockApi::start().await;
    let _missing = api
        .server
        .mock("GET", "/images/missing.png")
        .with_status(404)
        .create_async()
        .await;
    let classify_mock = api.forbid_classify().await;
    let url = format!("{}/images/missing.png", api.url());

    let err = api
        .client()
        .classify(url.as_str(), ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    match err {
        Error::ContentFetch {
            source_ref, status, ..
        } => {
            assert_eq!(source_ref, url);
            assert_eq!(status, Some(404));
        }
        other => panic!("expected ContentFetch, got {other:?}"),
    }
    classify_mock.assert_async().await;
}

#[tokio::test]
async fn test_normalize_does_not_call_classify() {
    let mut api = MockApi::start().await;
    let mock = api.forbid_classify().await;

    let items = api
        .client()
        .normalize(vec!["first", "second"])
        .await
        .expect("normalize");

    assert_eq!(items, vec![ContentItem::text("first"), ContentItem::text("second")]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_download_timeout_is_content_fetch_error() {
    let mut api = MockApi::start().await;
    let classify_mock = api.forbid_classify().await;
    let url = format!("{}/images/slow.png", silent_listener().await);

    let client = ClassifAiClient::builder()
        .anonymous()
        .base_url(api.url())
        .fetch_timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client
        .classify(url.as_str(), ClassifyOptions::new().labels(["a", "b"]))
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(10));
    match err {
        Error::ContentFetch {
            source_ref,
            message,
            status,
        } => {
            assert_eq!(source_ref, url);
            assert!(message.contains("timed out"), "{message}");
            assert_eq!(status, None);
        }
        other => panic!("expected ContentFetch, got {other:?}"),
    }
    classify_mock.assert_async().await;
}

#[tokio::test]
async fn test_per_call_timeout_overrides_client_timeout() {
    let client = ClassifAiClient::builder()
        .anonymous()
        .base_url(silent_listener().await)
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client
        .classify(
            "hello",
            ClassifyOptions::new()
                .labels(["a", "b"])
                .timeout(Duration::from_millis(300)),
        )
        .await
        .unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
    assert_eq!(err.code(), ErrorCode::Timeout);
}

#[tokio::test]
async fn test_large_local_image_is_sent_whole() {
    let mut api = MockApi::start().await;
    let bytes: Vec<u8> = (0..4 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();

    let mock = api
        .server
        .mock("POST", "/classify")
        .match_body(Matcher::PartialJson(json!({
            "content": [{"type": "image", "content": STANDARD.encode(&bytes)}]
        })))
        .with_status(200)
        .with_body(classify_response("a", &[("a", 0.6), ("b", 0.4)]).to_string())
        .create_async()
        .await;

    api.client()
        .classify(file.path(), ClassifyOptions::new().labels(["a", "b"]))
        .await
        .expect("classify");
    mock.assert_async().await;
}
