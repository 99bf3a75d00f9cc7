//! E2E tests for POST /chat against mocked provider endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dz_api::chat::{ChatConfig, gemini, openai, openrouter};
use helpers::TestHarness;

fn completion(content: &str) -> serde_json::Value {
    json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
}

/// Config pointing every provider family at one mock server.
fn config_for(server: &MockServer) -> ChatConfig {
    ChatConfig {
        openrouter_api_key: Some("sk-or".into()),
        openrouter_base_url: format!("{}/openrouter", server.uri()),
        openai_api_key: Some("sk-oa".into()),
        openai_base_url: format!("{}/openai", server.uri()),
        gemini_api_key: Some("g-key".into()),
        gemini_base_url: format!("{}/gemini", server.uri()),
        ..Default::default()
    }
}

#[tokio::test]
async fn e2e_default_provider_is_deepseek() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openrouter/chat/completions"))
        .and(body_partial_json(json!({"model": "deepseek/deepseek-r1-0528:free"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Stay hydrated.")))
        .expect(1)
        .mount(&server)
        .await;

    let h = TestHarness::with_chat_config(&config_for(&server));
    let body = json!({"messages": [{"role": "user", "content": "I have a fever"}]});
    let (status, json) = h.post_json("/chat", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"reply": "Stay hydrated."}));
}

#[tokio::test]
async fn e2e_each_provider_reaches_its_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/openrouter/chat/completions"))
        .and(body_partial_json(json!({"model": "meta-llama/llama-3.2-3b-instruct:free"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("llama says hi")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/openai/chat/completions"))
        .and(header("authorization", "Bearer sk-oa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("openai says hi")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/gemini/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "gemini says hi"}]}}]
        })))
        .mount(&server)
        .await;

    let h = TestHarness::with_chat_config(&config_for(&server));

    let (_, json) = h.chat("llama", "hello").await;
    assert_eq!(json["reply"], "llama says hi");
    let (_, json) = h.chat("openai", "hello").await;
    assert_eq!(json["reply"], "openai says hi");
    let (_, json) = h.chat("gemini", "hello").await;
    assert_eq!(json["reply"], "gemini says hi");
}

/// Provider errors come back as an apology with HTTP 200.
#[tokio::test]
async fn e2e_provider_failures_become_apologies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let h = TestHarness::with_chat_config(&config_for(&server));

    let (status, json) = h.chat("gemma", "hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reply"], openrouter::APOLOGY);

    let (_, json) = h.chat("openai", "hello").await;
    assert_eq!(json["reply"], openai::APOLOGY);

    let (_, json) = h.chat("gemini", "hello").await;
    assert_eq!(json["reply"], gemini::APOLOGY);
}

#[tokio::test]
async fn e2e_unknown_provider_is_rejected() {
    let h = TestHarness::new();
    let (status, json) = h.chat("mistral", "hello").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Invalid provider specified.", "status": 400}));
}

/// Unreachable provider host still yields the apology.
#[tokio::test]
async fn e2e_unreachable_provider_apologises() {
    let config = ChatConfig {
        openrouter_api_key: Some("sk-or".into()),
        openrouter_base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    };
    let h = TestHarness::with_chat_config(&config);

    let (status, json) = h.chat("deepseek", "hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reply"], openrouter::APOLOGY);
}
