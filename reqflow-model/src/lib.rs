//! # reqflow-model
//!
//! Model integrations for Reqflow pipelines.
//!
//! - [`gemini::GeminiClient`] - Gemini `generateContent` REST client
//! - [`MockLlm`] - deterministic stub for tests
//!
//! All clients implement [`reqflow_core::Llm`]: one prompt in, one raw
//! text reply out, with any transport or API failure surfacing as a model
//! error for the calling stage to capture.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::MockLlm;
