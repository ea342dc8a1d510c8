use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Backend returned status {status} for {path}")]
    BackendStatus { status: u16, path: String },

    #[error("Response is missing field: {field}")]
    MissingField { field: String },
}

pub type Result<T> = std::result::Result<T, HelperError>;
