use reqflow_core::{GenerateContentConfig, Llm, LlmRequest};
use reqflow_model::gemini::{GeminiClient, GeminiConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::flash("test-key").with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "```json\n{\"a\": 1}\n```"}]
                }
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 9,
                "totalTokenCount": 21
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response =
        client.generate(LlmRequest::new("gemini-2.5-flash", "Analyze this")).await.unwrap();

    assert_eq!(response.text, "```json\n{\"a\": 1}\n```");
    assert_eq!(response.usage_metadata.unwrap().total_token_count, 21);
}

#[tokio::test]
async fn test_prompt_and_temperature_in_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "rendered prompt"}]}],
            "generationConfig": {"temperature": 0.1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "ok"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = LlmRequest::new("gemini-2.5-flash", "rendered prompt")
        .with_config(GenerateContentConfig::with_temperature(0.1));

    let response = client.generate(request).await.unwrap();
    assert_eq!(response.text, "ok");
}

#[tokio::test]
async fn test_multiple_parts_are_concatenated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "first "}, {"text": "second"}]}
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.generate(LlmRequest::new("gemini-2.5-flash", "p")).await.unwrap();
    assert_eq!(response.text, "first second");
}

#[tokio::test]
async fn test_api_error_surfaces_as_model_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("{\"error\": \"quota exhausted\"}"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate(LlmRequest::new("gemini-2.5-flash", "p")).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("429"), "unexpected error: {message}");
    assert!(message.contains("quota exhausted"), "unexpected error: {message}");
}

#[tokio::test]
async fn test_empty_candidates_is_a_model_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.generate(LlmRequest::new("gemini-2.5-flash", "p")).await.unwrap_err();
    assert!(err.to_string().contains("no candidates"));
}
