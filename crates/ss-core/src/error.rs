use thiserror::Error;

#[derive(Error, Debug)]
pub enum SsError {
    #[error("Invalid filter pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Invalid plugin options: {0}")]
    Config(String),
    #[error(transparent)]
    Compressor(anyhow::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SsError>;
