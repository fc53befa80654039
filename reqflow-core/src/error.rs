#[derive(Debug, thiserror::Error)]
pub enum ReqflowError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Missing variable '{0}' in shared state")]
    MissingVariable(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReqflowError>;
