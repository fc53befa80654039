//! # reqflow-core
//!
//! Core traits and types for Reqflow prompt pipelines.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions for the pipeline:
//!
//! - [`SharedState`] - The key-value store threaded through a pipeline run
//! - [`PromptTemplate`] - Parameterized prompt text with enumerated variables
//! - [`Llm`] - The model-invocation trait (prompt in, raw text out)
//! - [`StageResult`] - Per-invocation outcome, including degraded results
//! - [`structured_output`] - Best-effort fenced-JSON extraction
//! - [`ReqflowError`] / [`Result`] - Unified error handling
//!
//! ## Error handling
//!
//! All stage-level failures are captured and returned as result values;
//! nothing in the pipeline propagates as an unhandled fault. A model reply
//! that fails to parse as JSON is a degraded success, not an error.

pub mod error;
pub mod extract;
pub mod model;
pub mod result;
pub mod state;
pub mod template;

pub use error::{ReqflowError, Result};
pub use extract::structured_output;
pub use model::{GenerateContentConfig, Llm, LlmRequest, LlmResponse, UsageMetadata};
pub use result::{StageResult, StageStatus};
pub use state::SharedState;
pub use template::PromptTemplate;
