//! Gemini REST client.
//!
//! Talks to the `generateContent` endpoint of the generative language API
//! with a single non-streaming request per stage invocation. No retry or
//! backoff: any transport or API failure surfaces as a model error for the
//! calling stage to capture.

mod client;
mod config;

pub use client::GeminiClient;
pub use config::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiConfig};
