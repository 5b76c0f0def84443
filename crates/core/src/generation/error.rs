use thiserror::Error;

/// Result type for text generation.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors returned by a text generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Missing API key or invalid client settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// The service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
