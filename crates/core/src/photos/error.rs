use thiserror::Error;

/// Result type for photo operations.
pub type Result<T> = std::result::Result<T, PhotoError>;

/// Errors returned by a photo provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// The service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The service reported an error; carries the first message it returned
    #[error("{0}")]
    Api(String),

    /// The response body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

impl PhotoError {
    /// Builds an API error from the `errors` array of a service response.
    ///
    /// Uses the first reported message, falling back to `fallback` when the
    /// array is absent or empty.
    pub fn from_reported(errors: &[String], fallback: impl Into<String>) -> Self {
        match errors.first() {
            Some(message) => Self::Api(message.clone()),
            None => Self::Api(fallback.into()),
        }
    }
}
