use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The model-invocation collaborator: rendered prompt in, raw text out.
///
/// The pipeline treats this as an opaque call that may fail with a
/// transport, quota, or validation error. Implementations live in
/// `reqflow-model`; tests use the deterministic mock there.
#[async_trait]
pub trait Llm: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, req: LlmRequest) -> Result<LlmResponse>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub model: String,
    pub prompt: String,
    pub config: Option<GenerateContentConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMetadata {
    pub prompt_token_count: i32,
    pub candidates_token_count: i32,
    pub total_token_count: i32,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self { model: model.into(), prompt: prompt.into(), config: None }
    }

    /// Set the generation config.
    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = Some(config);
        self
    }
}

impl GenerateContentConfig {
    pub fn with_temperature(temperature: f32) -> Self {
        Self { temperature: Some(temperature), ..Self::default() }
    }
}

impl LlmResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), usage_metadata: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_request_creation() {
        let req = LlmRequest::new("test-model", "hello");
        assert_eq!(req.model, "test-model");
        assert_eq!(req.prompt, "hello");
        assert!(req.config.is_none());
    }

    #[test]
    fn test_llm_request_with_config() {
        let req = LlmRequest::new("test-model", "hello")
            .with_config(GenerateContentConfig::with_temperature(0.1));
        assert_eq!(req.config.unwrap().temperature, Some(0.1));
    }

    #[test]
    fn test_llm_response_roundtrip() {
        let resp = LlmResponse {
            text: "done".to_string(),
            usage_metadata: Some(UsageMetadata {
                prompt_token_count: 10,
                candidates_token_count: 20,
                total_token_count: 30,
            }),
        };
        let encoded = serde_json::to_string(&resp).unwrap();
        let decoded: LlmResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.text, "done");
        assert_eq!(decoded.usage_metadata.unwrap().total_token_count, 30);
    }
}
