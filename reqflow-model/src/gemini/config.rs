/// Default base URL for the Gemini generative language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Override for the API base URL. Used by tests to point at a local
    /// mock server; `None` means [`GEMINI_API_BASE`].
    pub base_url: Option<String>,
    pub max_output_tokens: Option<i32>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), base_url: None, max_output_tokens: None }
    }

    /// Config for the default flash model.
    pub fn flash(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_MODEL)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_max_output_tokens(mut self, max: i32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_config() {
        let config = GeminiConfig::flash("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_base_url_override() {
        let config = GeminiConfig::flash("key").with_base_url("http://localhost:9000");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
    }
}
