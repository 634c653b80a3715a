use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Invalid table key: {0}")]
    InvalidKey(String),

    #[error("Invalid host url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to read metadata: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse metadata: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type MetadataResult<T> = Result<T, MetadataError>;
