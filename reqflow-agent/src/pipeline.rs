use crate::AgentStage;
use reqflow_core::{ReqflowError, Result, SharedState, StageResult};
use uuid::Uuid;

/// What the pipeline does after a stage returns an error-status result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// The failed stage's output key is written as the empty string and
    /// later stages still run. This matches the wiring of the original
    /// workflow, where downstream prompts simply interpolate an empty
    /// value.
    #[default]
    ContinueWithPartialState,
    /// Remaining stages are skipped; the run reports itself aborted.
    AbortOnError,
}

/// An ordered sequence of agent stages sharing one mutable state.
///
/// Stages run strictly in declaration order; stage N's prompt may read any
/// key seeded at the start or written by stages 1..N-1. Key coverage is
/// verified at construction time, so a well-formed pipeline cannot hit a
/// missing-variable render failure unless an earlier stage failed first.
pub struct Pipeline {
    name: String,
    description: String,
    stages: Vec<AgentStage>,
    seed_keys: Vec<String>,
    policy: ErrorPolicy,
}

pub struct PipelineBuilder {
    name: String,
    description: Option<String>,
    stages: Vec<AgentStage>,
    seed_keys: Vec<String>,
    policy: ErrorPolicy,
}

impl PipelineBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            stages: Vec::new(),
            seed_keys: Vec::new(),
            policy: ErrorPolicy::default(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Declares a key the caller seeds into the initial state.
    pub fn seed_key(mut self, key: impl Into<String>) -> Self {
        self.seed_keys.push(key.into());
        self
    }

    pub fn stage(mut self, stage: AgentStage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the stage wiring and builds the pipeline.
    ///
    /// # Errors
    ///
    /// Fails if the pipeline has no stages, if two stages declare the same
    /// output key, or if a stage reads a key that is neither seeded nor
    /// written by an earlier stage.
    pub fn build(self) -> Result<Pipeline> {
        if self.stages.is_empty() {
            return Err(ReqflowError::Pipeline(format!(
                "pipeline '{}' has no stages",
                self.name
            )));
        }

        let mut available = self.seed_keys.clone();
        for stage in &self.stages {
            for var in stage.required_variables() {
                if !available.iter().any(|k| k == var) {
                    return Err(ReqflowError::Pipeline(format!(
                        "stage '{}' reads '{}', which is neither seeded nor written by an earlier stage",
                        stage.name(),
                        var
                    )));
                }
            }

            let key = stage.output_key();
            if self.stages.iter().filter(|s| s.output_key() == key).count() > 1 {
                return Err(ReqflowError::Pipeline(format!(
                    "output key '{}' is declared by more than one stage",
                    key
                )));
            }
            available.push(key.to_string());
        }

        Ok(Pipeline {
            name: self.name,
            description: self.description.unwrap_or_default(),
            stages: self.stages,
            seed_keys: self.seed_keys,
            policy: self.policy,
        })
    }
}

/// Outcome of one pipeline run: the final shared state plus per-stage
/// results, in execution order.
#[derive(Debug)]
pub struct PipelineRun {
    id: Uuid,
    state: SharedState,
    results: Vec<StageResult>,
    aborted: bool,
}

impl PipelineRun {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn results(&self) -> &[StageResult] {
        &self.results
    }

    /// True when an `AbortOnError` pipeline stopped before its last stage.
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    pub fn into_state(self) -> SharedState {
        self.state
    }
}

impl Pipeline {
    pub fn builder(name: impl Into<String>) -> PipelineBuilder {
        PipelineBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stages(&self) -> &[AgentStage] {
        &self.stages
    }

    /// Runs every stage in order against the given initial state.
    ///
    /// Stage failures are captured in the per-stage results and handled
    /// according to the configured [`ErrorPolicy`]; they never surface as
    /// an `Err`. The only error here is caller misuse: a declared seed key
    /// absent from the initial state.
    #[tracing::instrument(skip(self, initial), fields(pipeline.name = %self.name))]
    pub async fn run(&self, initial: SharedState) -> Result<PipelineRun> {
        for key in &self.seed_keys {
            if !initial.contains_key(key) {
                return Err(ReqflowError::MissingInput(format!(
                    "seed key '{key}' is absent from the initial state"
                )));
            }
        }

        let id = Uuid::new_v4();
        tracing::info!(run.id = %id, stages = self.stages.len(), "Starting pipeline run");

        let mut state = initial;
        let mut results = Vec::with_capacity(self.stages.len());
        let mut aborted = false;

        for stage in &self.stages {
            let result = stage.run(&mut state).await;
            let failed = result.is_error();
            results.push(result);

            if failed {
                match self.policy {
                    ErrorPolicy::AbortOnError => {
                        tracing::warn!(run.id = %id, stage.name = %stage.name(), "Aborting pipeline run after stage failure");
                        aborted = true;
                        break;
                    }
                    ErrorPolicy::ContinueWithPartialState => {
                        // Later stages read the failed stage's key as empty.
                        state.set(stage.output_key().to_string(), "");
                    }
                }
            }
        }

        tracing::info!(run.id = %id, aborted, "Pipeline run finished");
        Ok(PipelineRun { id, state, results, aborted })
    }
}
