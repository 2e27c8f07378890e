// ABOUTME: HTTP-level tests for the Gemini provider against a mock server
// ABOUTME: Checks responseSchema sanitising, system instructions and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Aquaclub Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use aquaclub::errors::ErrorCode;
use aquaclub::flows::{LlmGenerationService, TrainingPlanFlow};
use aquaclub::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmProvider};
use aquaclub::models::{Methodology, TrainingPlanInput};
use common::{conformant_mesocycle, init_test_logging};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn gemini_at(server: &MockServer) -> GeminiProvider {
    init_test_logging();
    GeminiProvider::new("test-key")
        .unwrap()
        .with_base_url(server.uri())
}

fn candidate(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 900, "candidatesTokenCount": 2100, "totalTokenCount": 3000 }
    })
}

fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key) || map.values().any(|v| contains_key(v, key)),
        Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

#[tokio::test]
async fn test_training_flow_over_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(query_param_is_missing("key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&conformant_mesocycle(3).to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let flow = TrainingPlanFlow::new(LlmGenerationService::new(gemini_at(&server)));
    let input = TrainingPlanInput::new(
        "Absoluto apnea",
        Methodology::Traditional,
        "Aumentar el tiempo de apnea dinámica",
        3,
    );

    let plan = flow.generate(&input).await.unwrap();
    assert_eq!(plan.microcycles.len(), 3);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    let config = &body["generationConfig"];
    assert_eq!(config["responseMimeType"], json!("application/json"));
    assert_eq!(config["candidateCount"], json!(1));
    assert_eq!(
        config["responseSchema"]["properties"]["microcycles"]["maxItems"],
        json!(3)
    );
    assert!(!contains_key(&config["responseSchema"], "additionalProperties"));

    let system = body["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
    assert!(system.contains(Methodology::Traditional.description()));
    assert!(!system.contains("Esquema JSON"));
    assert_eq!(body["contents"][0]["role"], json!("user"));
}

#[tokio::test]
async fn test_plain_request_has_no_response_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("Hola")))
        .mount(&server)
        .await;

    let response = gemini_at(&server)
        .complete(&ChatRequest::new(vec![ChatMessage::user("hola")]).with_temperature(0.5))
        .await
        .unwrap();

    assert_eq!(response.content, "Hola");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.usage.unwrap().total_tokens, 3000);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["generationConfig"].get("responseMimeType").is_none());
    assert!(body.get("systemInstruction").is_none());
}

#[tokio::test]
async fn test_model_override_changes_the_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = gemini_at(&server).with_default_model("gemini-2.5-pro");
    let response = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hola")]))
        .await
        .unwrap();
    assert_eq!(response.model, "gemini-2.5-pro");
}

#[tokio::test]
async fn test_invalid_key_maps_to_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let error = gemini_at(&server)
        .complete(&ChatRequest::new(vec![ChatMessage::user("hola")]))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
}

#[tokio::test]
async fn test_quota_exhaustion_extracts_retry_delay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "You exceeded your current quota. Please retry in 6.406453963s.",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let error = gemini_at(&server)
        .complete(&ChatRequest::new(vec![ChatMessage::user("hola")]))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalRateLimited);
    assert_eq!(
        error.message,
        "AI service quota exceeded. Please try again in 7 seconds."
    );
}

#[tokio::test]
async fn test_blocked_candidate_yields_empty_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .mount(&server)
        .await;

    let response = gemini_at(&server)
        .complete(&ChatRequest::new(vec![ChatMessage::user("hola")]))
        .await
        .unwrap();

    assert!(response.content.is_empty());
    assert_eq!(response.finish_reason.as_deref(), Some("SAFETY"));
}

#[test]
fn test_debug_output_redacts_the_key() {
    let provider = GeminiProvider::new("super-secret").unwrap();
    let debug = format!("{provider:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("REDACTED"));
}

#[tokio::test]
async fn test_transport_errors_do_not_expose_the_key() {
    init_test_logging();
    let provider = GeminiProvider::new("SUPERSECRETKEY")
        .unwrap()
        .with_base_url("http://127.0.0.1:1");

    let error = provider
        .complete(&ChatRequest::new(vec![ChatMessage::user("hola")]))
        .await
        .unwrap_err();
    assert!(!error.message.contains("SUPERSECRETKEY"), "{}", error.message);

    let health = provider.health_check().await.unwrap_err();
    assert!(!health.message.contains("SUPERSECRETKEY"), "{}", health.message);
}
