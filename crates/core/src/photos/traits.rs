use async_trait::async_trait;
use serde_json::Value;

use super::{PhotoSearch, Result};

/// Read-only access to a photo library.
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Searches photos. Returns the service payload unmodified.
    async fn search(&self, search: &PhotoSearch) -> Result<Value>;

    /// Fetches one random photo, optionally matching `query`.
    async fn random(&self, query: Option<&str>) -> Result<Value>;

    /// Fetches a photo by its service id.
    async fn photo(&self, id: &str) -> Result<Value>;
}
