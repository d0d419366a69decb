use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlagiarismError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty comparison: {0}")]
    EmptyComparison(String),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
