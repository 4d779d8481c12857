use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use email_summarizer::ai::{GeminiClient, Summarizer};
use email_summarizer::api::{AppState, build_router};
use email_summarizer::core::config::GeminiSettings;
use email_summarizer::errors::SummarizerError;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn settings_for(server: &MockServer) -> GeminiSettings {
    let mut settings = GeminiSettings::new("test-key");
    settings.api_base = format!("{}/v1beta", server.uri());
    settings
}

fn candidate_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

const ITEMS: &str = r#"[{"sender":"a@x.com","subject":"Meeting re: budget","summary":["Budget due Friday","Bring Q3 numbers","Room 4B"]}]"#;

#[tokio::test]
async fn test_summarize_sends_schema_and_returns_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {"required": ["sender", "subject", "summary"]}
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(ITEMS)))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&settings_for(&server)).unwrap();
    let raw = client.summarize("From: a@x.com").await.unwrap();

    assert_eq!(raw, ITEMS);
}

#[tokio::test]
async fn test_summarize_embeds_email_text_in_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response("[]")))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&settings_for(&server)).unwrap();
    client.summarize("Subject: Lunch on Thursday").await.unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = sent["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("---\nSubject: Lunch on Thursday\n---"));
}

#[tokio::test]
async fn test_summarize_maps_error_status_to_gemini_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&settings_for(&server)).unwrap();
    let err = client.summarize("hello").await.unwrap_err();

    match err {
        SummarizerError::GeminiError(msg) => {
            assert!(msg.contains("403"));
            assert!(msg.contains("API key not valid"));
        }
        other => panic!("expected GeminiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_summarize_reports_blocked_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new(&settings_for(&server)).unwrap();
    let err = client.summarize("hello").await.unwrap_err();

    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn test_summarize_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_response("[]"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut settings = settings_for(&server);
    settings.timeout = Duration::from_millis(200);
    let client = GeminiClient::new(&settings).unwrap();
    let err = client.summarize("hello").await.unwrap_err();

    assert!(matches!(err, SummarizerError::HttpError(ref msg) if msg.contains("timed out")));
}

#[tokio::test]
async fn test_summarize_reports_unreachable_service() {
    let mut settings = GeminiSettings::new("test-key");
    settings.api_base = "http://127.0.0.1:1/v1beta".to_string();

    let client = GeminiClient::new(&settings).unwrap();
    let err = client.summarize("hello").await.unwrap_err();

    assert!(matches!(err, SummarizerError::HttpError(_)));
}

#[tokio::test]
async fn test_router_with_gemini_client_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(ITEMS)))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&settings_for(&server)).unwrap();
    let app = build_router(AppState::new(Arc::new(client)));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"text":"From: a@x.com Subject: Meeting re: budget due Friday"}"#,
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let expected: Value = serde_json::from_str(ITEMS).unwrap();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_router_surfaces_remote_failure_as_500() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&settings_for(&server)).unwrap();
    let app = build_router(AppState::new(Arc::new(client)));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .body(Body::from(r#"{"text":"hello"}"#))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Internal AI processing failed.");
    assert_eq!(
        body["details"],
        "Failed to access Gemini API: status 503 Service Unavailable: overloaded"
    );
}
