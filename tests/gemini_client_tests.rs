//! Contract tests for the Gemini HTTP client against a local mock server.
//!
//! Run with: cargo test --test gemini_client_tests

use project_forge::gemini::{
    GenerationError, GenerationRequest, GeminiClient, HistoryTurn, TextGenerator,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        server.uri(),
        "gemini-1.5-flash".to_string(),
        Some("test-api-key".to_string()),
    )
}

fn candidates_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidates_body("Hello builder!")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client
        .generate(GenerationRequest::text("hi"))
        .await
        .unwrap();
    assert_eq!(text, "Hello builder!");
}

#[tokio::test]
async fn test_generate_sends_system_context_and_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [ { "text": "persona frame" } ] },
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidates_body(r#"["Q1"]"#)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerationRequest::text("idea")
        .with_system("persona frame")
        .with_context("assembled context")
        .with_schema(json!({"type": "ARRAY", "items": {"type": "STRING"}}));

    let text = client.generate(request).await.unwrap();
    assert_eq!(text, r#"["Q1"]"#);
}

#[tokio::test]
async fn test_generate_replays_history_as_alternating_roles() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user",  "parts": [ { "text": "first question" } ] },
                { "role": "model", "parts": [ { "text": "first answer" } ] },
                { "role": "user",  "parts": [ { "text": "second question" } ] }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidates_body("second answer")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerationRequest::text("second question").with_history(vec![
        HistoryTurn::user("first question"),
        HistoryTurn::agent("first answer"),
    ]);

    assert_eq!(client.generate(request).await.unwrap(), "second answer");
}

#[tokio::test]
async fn test_api_error_is_surfaced_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(GenerationRequest::text("hi"))
        .await
        .unwrap_err();

    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Resource exhausted");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(GenerationRequest::text("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Malformed(_)));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(GenerationRequest::text("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Malformed(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind-then-drop to get a port with nothing listening
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = GeminiClient::new(uri, "gemini-1.5-flash".to_string(), None);
    let err = client
        .generate(GenerationRequest::text("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)));
}
