use crate::prompts::{ANALYSIS_INSTRUCTION, KEY_REQUIREMENTS_ANALYSIS, KEY_USER_REQUEST};
use reqflow_agent::{AgentStage, Pipeline};
use reqflow_core::{Llm, Result, SharedState, StageStatus, structured_output};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Outcome of one requirements analysis.
///
/// Three shapes: clean success (`analysis` is parsed JSON), degraded
/// success (the model replied but the reply did not parse; `raw_analysis`
/// carries the text), and hard error (the model call itself failed, or no
/// requirement was provided).
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub status: StageStatus,
    pub analysis: Option<Value>,
    pub raw_analysis: String,
    pub message: String,
}

impl AnalysisResult {
    fn error(message: impl Into<String>) -> Self {
        Self {
            status: StageStatus::Error,
            analysis: None,
            raw_analysis: String::new(),
            message: message.into(),
        }
    }
}

/// Single-stage requirements analyzer: one prompt, one model call, one
/// best-effort JSON extraction.
pub struct RequirementsAnalyzer {
    pipeline: Pipeline,
}

impl RequirementsAnalyzer {
    pub fn new(model: Arc<dyn Llm>) -> Result<Self> {
        let stage = AgentStage::builder("requirements_analyzer")
            .description("Analyze user requirements and generate detailed requirement specifications")
            .model(model)
            .instruction(ANALYSIS_INSTRUCTION)
            .temperature(0.1)
            .output_key(KEY_REQUIREMENTS_ANALYSIS)
            .build()?;

        let pipeline = Pipeline::builder("requirements_analysis")
            .description("Single-stage requirements analysis")
            .seed_key(KEY_USER_REQUEST)
            .stage(stage)
            .build()?;

        Ok(Self { pipeline })
    }

    /// Analyzes a free-text requirement.
    ///
    /// An empty or whitespace-only request short-circuits to an error
    /// result before any model call. All other failures are folded into
    /// the returned result; this function never fails outright.
    #[tracing::instrument(skip(self, user_request), fields(request.chars = user_request.len()))]
    pub async fn analyze(&self, user_request: &str) -> AnalysisResult {
        if user_request.trim().is_empty() {
            tracing::warn!("Rejecting empty requirement before any model call");
            return AnalysisResult::error("no requirement provided");
        }

        let initial = SharedState::new().with(KEY_USER_REQUEST, user_request);
        let run = match self.pipeline.run(initial).await {
            Ok(run) => run,
            Err(e) => return AnalysisResult::error(format!("requirements analysis failed: {e}")),
        };

        let Some(stage_result) = run.results().first() else {
            return AnalysisResult::error("requirements analysis produced no stage result");
        };
        if stage_result.is_error() {
            return AnalysisResult::error(format!(
                "requirements analysis failed: {}",
                stage_result.message
            ));
        }

        let extraction = structured_output(&stage_result.raw_text);
        match extraction.parsed {
            Some(parsed) => AnalysisResult {
                status: StageStatus::Success,
                analysis: Some(parsed),
                raw_analysis: extraction.raw_text,
                message: "requirements analysis complete".to_string(),
            },
            None => AnalysisResult {
                status: StageStatus::Success,
                analysis: None,
                raw_analysis: extraction.raw_text,
                message: "requirements analysis complete, but structured parsing failed; returning raw analysis"
                    .to_string(),
            },
        }
    }
}
