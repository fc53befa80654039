use reqflow_core::{
    GenerateContentConfig, Llm, LlmRequest, PromptTemplate, ReqflowError, Result, SharedState,
    StageResult,
};
use std::sync::Arc;

/// One unit of prompt-render + model-invoke + state-write.
///
/// Configuration is immutable after construction: the stage name, model
/// handle, instruction template, generation config, and the output key the
/// raw model text is written under.
pub struct AgentStage {
    name: String,
    description: String,
    model: Arc<dyn Llm>,
    template: PromptTemplate,
    config: GenerateContentConfig,
    output_key: String,
}

impl std::fmt::Debug for AgentStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentStage")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("model", &self.model.name())
            .field("output_key", &self.output_key)
            .finish()
    }
}

pub struct AgentStageBuilder {
    name: String,
    description: Option<String>,
    model: Option<Arc<dyn Llm>>,
    instruction: Option<String>,
    config: GenerateContentConfig,
    output_key: Option<String>,
}

impl AgentStageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model: None,
            instruction: None,
            config: GenerateContentConfig::default(),
            output_key: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn model(mut self, model: Arc<dyn Llm>) -> Self {
        self.model = Some(model);
        self
    }

    /// Instruction text with `{NAME}` placeholders resolved from shared state.
    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    pub fn generate_content_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    pub fn build(self) -> Result<AgentStage> {
        let model =
            self.model.ok_or_else(|| ReqflowError::Pipeline("Model is required".to_string()))?;
        let instruction = self
            .instruction
            .ok_or_else(|| ReqflowError::Pipeline("Instruction is required".to_string()))?;
        let output_key = self
            .output_key
            .ok_or_else(|| ReqflowError::Pipeline("Output key is required".to_string()))?;

        Ok(AgentStage {
            name: self.name,
            description: self.description.unwrap_or_default(),
            model,
            template: PromptTemplate::new(instruction),
            config: self.config,
            output_key,
        })
    }
}

impl AgentStage {
    pub fn builder(name: impl Into<String>) -> AgentStageBuilder {
        AgentStageBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn output_key(&self) -> &str {
        &self.output_key
    }

    /// State keys this stage's instruction reads.
    pub fn required_variables(&self) -> &[String] {
        self.template.required_variables()
    }

    /// Renders the instruction, invokes the model once, and writes the raw
    /// reply under the output key.
    ///
    /// Render and invocation failures are caught and converted into an
    /// error-status [`StageResult`]; they never propagate as faults. On
    /// failure nothing is written to state.
    #[tracing::instrument(
        skip(self, state),
        fields(
            stage.name = %self.name,
            model.name = %self.model.name(),
            output.key = %self.output_key
        )
    )]
    pub async fn run(&self, state: &mut SharedState) -> StageResult {
        tracing::info!("Starting stage execution");

        let prompt = match self.template.render(state) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::warn!(error = %e, "Prompt rendering failed");
                return StageResult::error(&self.name, e.to_string());
            }
        };

        let request =
            LlmRequest::new(self.model.name(), prompt).with_config(self.config.clone());

        match self.model.generate(request).await {
            Ok(response) => {
                tracing::info!(chars = response.text.len(), "Stage execution completed");
                state.set(self.output_key.clone(), response.text.clone());
                StageResult::success(&self.name, response.text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model invocation failed");
                StageResult::error(&self.name, e.to_string())
            }
        }
    }
}
