mod common;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use bananatoon::gemini::{build_instruction, GeminiClient, ImageTransformer, TransformError};
use common::mock_gemini::{MockGemini, MockResponse};
use common::{client_for, gemini_config, TEST_MODEL};

#[tokio::test]
async fn sends_image_and_instruction() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::image("cmVzdWx0")).await;

    let client = client_for(&mock.base_url());
    let source = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    client
        .transform(&source, "image/jpeg", "japanese anime")
        .await
        .expect("transform succeeds");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.path,
        format!("/v1beta/models/{}:generateContent", TEST_MODEL)
    );
    assert_eq!(request.header("x-goog-api-key"), Some("test-key"));

    let body = request.json();
    let parts = &body["contents"][0]["parts"];
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
    assert_eq!(parts[0]["inlineData"]["data"], BASE64.encode(&source));
    assert_eq!(parts[1]["text"], build_instruction("japanese anime"));
}

#[tokio::test]
async fn returns_png_data_url_with_verbatim_payload() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::image("iVBORw0KGgoAAAANSUhEUg==")).await;

    let client = client_for(&mock.base_url());
    let image = client.transform(b"src", "image/png", "x").await.unwrap();

    assert_eq!(
        image.to_string(),
        "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg=="
    );
}

#[tokio::test]
async fn zero_candidates_is_no_image() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"candidates": []}"#)).await;

    let client = client_for(&mock.base_url());
    let err = client.transform(b"src", "image/png", "x").await.unwrap_err();
    assert!(matches!(err, TransformError::NoImageReturned));
    assert_eq!(err.user_message(), "No image data returned from Gemini.");
}

#[tokio::test]
async fn text_only_candidate_is_no_image() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"candidates": [{"content": {"parts": [{"text": "I can't do that."}]}}]}"#,
    ))
    .await;

    let client = client_for(&mock.base_url());
    let err = client.transform(b"src", "image/png", "x").await.unwrap_err();
    assert!(matches!(err, TransformError::NoImageReturned));
}

#[tokio::test]
async fn api_error_surfaces_service_message() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::error(400, "API key not valid. Please pass a valid API key."))
        .await;

    let client = client_for(&mock.base_url());
    let err = client.transform(b"src", "image/png", "x").await.unwrap_err();
    match &err {
        TransformError::Api { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert!(err.user_message().contains("API key not valid"));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::json("not json at all")).await;

    let client = client_for(&mock.base_url());
    let err = client.transform(b"src", "image/png", "x").await.unwrap_err();
    assert!(matches!(err, TransformError::Parse(_)));
}

#[tokio::test]
async fn unreachable_service_is_connection_error() {
    // Bind and drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));
    let err = client.transform(b"src", "image/png", "x").await.unwrap_err();
    assert!(matches!(err, TransformError::Connection(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn missing_key_never_reaches_service() {
    let mock = MockGemini::start().await;
    let client = GeminiClient::new(&gemini_config(&mock.base_url()), None).unwrap();

    let err = client.transform(b"src", "image/png", "x").await.unwrap_err();
    assert!(matches!(err, TransformError::MissingApiKey));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn one_attempt_per_call() {
    let mock = MockGemini::start().await;
    mock.enqueue_response(MockResponse::error(503, "overloaded")).await;

    let client = client_for(&mock.base_url());
    assert!(client.transform(b"src", "image/png", "x").await.is_err());
    assert_eq!(mock.captured_requests().await.len(), 1);
}
