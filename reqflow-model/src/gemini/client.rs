use super::config::{GEMINI_API_BASE, GeminiConfig};
use async_trait::async_trait;
use reqflow_core::{Llm, LlmRequest, LlmResponse, ReqflowError, Result, UsageMetadata};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini client for the `generateContent` REST endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use reqflow_model::gemini::{GeminiClient, GeminiConfig};
///
/// let client = GeminiClient::new(GeminiConfig::flash(
///     std::env::var("GOOGLE_API_KEY").unwrap()
/// ))?;
/// ```
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<RequestGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<ResponseUsage>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseUsage {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
    total_token_count: Option<i32>,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ReqflowError::Model(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a client for the default flash model.
    pub fn flash(api_key: impl Into<String>) -> Result<Self> {
        Self::new(GeminiConfig::flash(api_key))
    }

    /// Build the API URL for content generation.
    fn api_url(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(GEMINI_API_BASE);
        format!("{}/models/{}:generateContent", base.trim_end_matches('/'), self.config.model)
    }

    fn build_request(&self, request: &LlmRequest) -> GenerateContentRequest {
        let temperature = request.config.as_ref().and_then(|c| c.temperature);
        let top_p = request.config.as_ref().and_then(|c| c.top_p);
        let max_output_tokens = request
            .config
            .as_ref()
            .and_then(|c| c.max_output_tokens)
            .or(self.config.max_output_tokens);

        let generation_config =
            if temperature.is_none() && top_p.is_none() && max_output_tokens.is_none() {
                None
            } else {
                Some(RequestGenerationConfig { temperature, top_p, max_output_tokens })
            };

        GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart { text: request.prompt.clone() }],
            }],
            generation_config,
        }
    }

    fn convert_response(response: GenerateContentResponse) -> Result<LlmResponse> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ReqflowError::Model("Gemini API returned no candidates".to_string()))?;

        let text = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        let usage_metadata = response.usage_metadata.map(|u| UsageMetadata {
            prompt_token_count: u.prompt_token_count.unwrap_or(0),
            candidates_token_count: u.candidates_token_count.unwrap_or(0),
            total_token_count: u.total_token_count.unwrap_or(0),
        });

        Ok(LlmResponse { text, usage_metadata })
    }
}

#[async_trait]
impl Llm for GeminiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    #[tracing::instrument(skip(self, request), fields(model.name = %self.config.model))]
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse> {
        let body = self.build_request(&request);

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ReqflowError::Model(format!("Gemini API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReqflowError::Model(format!(
                "Gemini API error ({status}): {error_text}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ReqflowError::Model(format!("Failed to decode Gemini response: {e}")))?;

        Self::convert_response(parsed)
    }
}
