//! # reqflow-agent
//!
//! Agent stages and sequential pipelines for Reqflow.
//!
//! An [`AgentStage`] wraps one prompt template plus model configuration and
//! performs a single render → invoke → write-back step against the shared
//! state. A [`Pipeline`] runs an ordered sequence of stages, each stage's
//! output becoming readable input for all later stages.
//!
//! Execution is strictly sequential: stage N's prompt may depend on stage
//! N-1's output, so there is no parallelism between stages. Stage failures
//! are captured as error-status results and handled per [`ErrorPolicy`];
//! they never terminate the run as an unhandled fault.

pub mod pipeline;
pub mod stage;

pub use pipeline::{ErrorPolicy, Pipeline, PipelineBuilder, PipelineRun};
pub use stage::{AgentStage, AgentStageBuilder};
