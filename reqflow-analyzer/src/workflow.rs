use crate::prompts::{
    ANALYSIS_INSTRUCTION, ARCHITECT_INSTRUCTION, CODER_INSTRUCTION, KEY_ARCHITECTURE_DESIGN,
    KEY_GENERATED_CODE, KEY_REQUIREMENTS_ANALYSIS, KEY_REVIEW_AND_TESTS, KEY_USER_REQUEST,
    REVIEWER_INSTRUCTION,
};
use reqflow_agent::{AgentStage, Pipeline};
use reqflow_core::{Llm, Result};
use std::sync::Arc;

/// Builds the requirements-driven development workflow.
///
/// Four sequential stages sharing one state: requirements analysis,
/// architecture design, code generation, then review and test planning.
/// Each stage reads the outputs of the stages before it.
pub fn requirements_workflow(model: Arc<dyn Llm>) -> Result<Pipeline> {
    let analyzer = AgentStage::builder("requirements_analyzer")
        .description("Analyze user requirements and produce a structured requirements document")
        .model(model.clone())
        .instruction(ANALYSIS_INSTRUCTION)
        .temperature(0.1)
        .output_key(KEY_REQUIREMENTS_ANALYSIS)
        .build()?;

    let architect = AgentStage::builder("system_architect")
        .description("Design the system architecture from the requirements analysis")
        .model(model.clone())
        .instruction(ARCHITECT_INSTRUCTION)
        .temperature(0.2)
        .output_key(KEY_ARCHITECTURE_DESIGN)
        .build()?;

    let coder = AgentStage::builder("code_generator")
        .description("Generate a concrete implementation from the architecture design")
        .model(model.clone())
        .instruction(CODER_INSTRUCTION)
        .temperature(0.3)
        .output_key(KEY_GENERATED_CODE)
        .build()?;

    let reviewer = AgentStage::builder("code_reviewer_tester")
        .description("Review code quality and produce a test plan")
        .model(model)
        .instruction(REVIEWER_INSTRUCTION)
        .temperature(0.2)
        .output_key(KEY_REVIEW_AND_TESTS)
        .build()?;

    Pipeline::builder("requirements_driven_development_workflow")
        .description("Complete development workflow from requirements analysis to code generation")
        .seed_key(KEY_USER_REQUEST)
        .stage(analyzer)
        .stage(architect)
        .stage(coder)
        .stage(reviewer)
        .build()
}
