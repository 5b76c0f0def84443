//! Unsplash photo API client.

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use serde_json::Value;

use inkpress_core::photos::{PhotoError, PhotoProvider, PhotoSearch, Result};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Error body returned by Unsplash on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Photo provider backed by the Unsplash REST API.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http_client: Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    /// Create a client with the default base URL.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            access_key: access_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for proxies or tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL under the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a caller-supplied id
    /// containing `/`, `?` or `#` stays inside its segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let invalid = || PhotoError::Network(format!("invalid base URL: {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue an authenticated GET and return the JSON payload.
    ///
    /// Non-success responses become `PhotoError::Api` with the first message
    /// of the body's `errors` array.
    async fn get_json(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Value> {
        let response = self
            .http_client
            .get(self.endpoint(segments)?)
            .header(header::AUTHORIZATION, format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .query(query)
            .send()
            .await
            .map_err(|e| PhotoError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(PhotoError::from_reported(&body.errors, status.to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| PhotoError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    async fn search(&self, search: &PhotoSearch) -> Result<Value> {
        let query = [
            ("query", search.query.clone()),
            ("page", search.page.to_string()),
            ("per_page", search.per_page.to_string()),
        ];

        self.get_json(&["search", "photos"], &query)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, query = %search.query, "Error searching Unsplash photos")
            })
    }

    async fn random(&self, query: Option<&str>) -> Result<Value> {
        let mut params = vec![("count", "1".to_string())];
        if let Some(query) = query {
            params.push(("query", query.to_string()));
        }

        let payload = self
            .get_json(&["photos", "random"], &params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error getting random Unsplash photo"))?;

        // With `count` set the service answers with an array.
        match payload {
            Value::Array(photos) => photos
                .into_iter()
                .next()
                .ok_or_else(|| PhotoError::Api("No photos found".to_string())),
            photo => Ok(photo),
        }
    }

    async fn photo(&self, id: &str) -> Result<Value> {
        self.get_json(&["photos", id], &[])
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, photo_id = %id, "Error getting Unsplash photo by ID")
            })
    }
}
