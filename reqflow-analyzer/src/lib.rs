//! # reqflow-analyzer
//!
//! The Reqflow domain application: requirements analysis over an LLM.
//!
//! [`RequirementsAnalyzer`] runs a single analysis stage and extracts a
//! JSON specification from the reply, degrading to raw text when the model
//! did not produce parseable JSON. [`requirements_workflow`] wires the full
//! four-stage development pipeline: analyze, architect, generate code,
//! review.

pub mod analyzer;
pub mod config;
pub mod prompts;
pub mod workflow;

pub use analyzer::{AnalysisResult, RequirementsAnalyzer};
pub use config::AnalyzerConfig;
pub use workflow::requirements_workflow;
