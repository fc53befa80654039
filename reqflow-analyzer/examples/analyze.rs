//! Demo: analyze a sample requirement with the Gemini-backed analyzer.
//!
//! Needs `GOOGLE_API_KEY` in the environment or a `.env` file; `MODEL`
//! optionally overrides the default model.

use reqflow_analyzer::{AnalyzerConfig, RequirementsAnalyzer};
use reqflow_core::{Result, StageStatus};
use reqflow_model::gemini::{GeminiClient, GeminiConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AnalyzerConfig::from_env()?;
    let model = GeminiClient::new(GeminiConfig::new(config.api_key, config.model))?;
    let analyzer = RequirementsAnalyzer::new(Arc::new(model))?;

    let user_request = "\
        I need an online task management system. Users can create, edit, \
        and delete tasks, with task categories, priorities, and due-date \
        reminders. It must support multi-user collaboration with realtime \
        sync, a clean and simple interface, and mobile access.";

    let result = analyzer.analyze(user_request).await;

    match result.status {
        StageStatus::Success => {
            println!("Requirements analysis complete.");
            match result.analysis {
                Some(analysis) => {
                    println!("\nStructured analysis:");
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                }
                None => {
                    println!("\nRaw analysis ({}):", result.message);
                    println!("{}", result.raw_analysis);
                }
            }
        }
        StageStatus::Error => {
            eprintln!("Analysis failed: {}", result.message);
        }
    }

    Ok(())
}
