use crate::{StageResult, StageStatus};
use serde_json::Value;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Locates the first fenced JSON block in free-form model output.
///
/// Returns the text between the ```` ```json ```` marker and the next
/// fence. If the block is never closed, the rest of the input is the
/// candidate. First-match semantics: later fences are ignored.
fn fenced_json_block(raw: &str) -> Option<&str> {
    let start = raw.find(JSON_FENCE)? + JSON_FENCE.len();
    match raw[start..].find(FENCE) {
        Some(end) => Some(&raw[start..start + end]),
        None => Some(&raw[start..]),
    }
}

/// Best-effort extraction of structured data from raw model text.
///
/// Total over all inputs: extraction itself never fails. A candidate that
/// does not parse as JSON yields `status = Success` with `parsed = None`
/// and a message noting the degraded result, so the caller still gets the
/// raw text back.
pub fn structured_output(raw: &str) -> StageResult {
    let candidate = fenced_json_block(raw).unwrap_or(raw);

    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(parsed) => StageResult {
            stage: "structured_output".to_string(),
            status: StageStatus::Success,
            raw_text: raw.to_string(),
            parsed: Some(parsed),
            message: "structured output parsed".to_string(),
        },
        Err(e) => StageResult {
            stage: "structured_output".to_string(),
            status: StageStatus::Success,
            raw_text: raw.to_string(),
            parsed: None,
            message: format!("structured output parsing failed ({e}); returning raw text"),
        },
    }
}
