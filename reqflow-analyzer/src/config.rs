use reqflow_core::{ReqflowError, Result};
use reqflow_model::gemini::DEFAULT_MODEL;

/// Environment-driven configuration for the analyzer.
///
/// `MODEL` selects the Gemini model (defaults to `gemini-2.5-flash`);
/// `GOOGLE_API_KEY` must be set.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub model: String,
    pub api_key: String,
}

impl AnalyzerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { model: DEFAULT_MODEL.to_string(), api_key: api_key.into() }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// # Errors
    ///
    /// Fails with a configuration error if `GOOGLE_API_KEY` is unset.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| ReqflowError::Config("GOOGLE_API_KEY is not set".to_string()))?;
        let model = std::env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self { model, api_key })
    }
}
