use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Success,
    Error,
}

/// Outcome of one stage invocation (or of structured-output extraction).
///
/// A failed JSON parse is a degraded result, not an error: `status` stays
/// `Success`, `parsed` is `None`, and `message` says what happened. Only a
/// failed render or model invocation produces `Error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResult {
    pub stage: String,
    pub status: StageStatus,
    pub raw_text: String,
    pub parsed: Option<Value>,
    pub message: String,
}

impl StageResult {
    pub fn success(stage: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let stage = stage.into();
        let message = format!("stage '{stage}' completed");
        Self { stage, status: StageStatus::Success, raw_text: raw_text.into(), parsed: None, message }
    }

    pub fn error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            status: StageStatus::Error,
            raw_text: String::new(),
            parsed: None,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == StageStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == StageStatus::Error
    }
}
