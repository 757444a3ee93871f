use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to load collection file: {0}")]
    CollectionLoadError(String),

    #[error("Invalid collection: {0}")]
    InvalidCollection(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
