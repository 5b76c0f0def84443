use async_trait::async_trait;

use super::Result;

/// Produces text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt`.
    ///
    /// Returns an empty string when the service produced no text. Failures
    /// are not retried.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
