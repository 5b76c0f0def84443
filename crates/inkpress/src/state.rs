//! Application state with injected services.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage and both third-party services are held as trait
//! objects so tests can swap in fakes.

use std::sync::Arc;

use inkpress_core::generation::{GenerationSettings, TextGenerator};
use inkpress_core::photos::PhotoProvider;
use inkpress_core::storage::PostRepository;

use crate::config::Config;
use crate::integrations::{OpenAiGenerator, UnsplashClient};
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler; every field is a cheap `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Post repository (SQLite in production).
    pub post_repo: Arc<dyn PostRepository>,
    /// Generates post bodies on creation.
    pub generator: Arc<dyn TextGenerator>,
    /// Hero image search and lookup.
    pub photos: Arc<dyn PhotoProvider>,
}

impl AppState {
    /// Creates an AppState from already constructed services.
    pub fn build(
        post_repo: Arc<dyn PostRepository>,
        generator: Arc<dyn TextGenerator>,
        photos: Arc<dyn PhotoProvider>,
    ) -> Self {
        Self {
            post_repo,
            generator,
            photos,
        }
    }

    /// Creates AppState with SQLite storage and the OpenAI / Unsplash clients.
    ///
    /// Fails when the database cannot be opened or initialised.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let sqlite_repo = Arc::new(SqliteRepository::new(&config.database_path).await?);

        if config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; creating posts will fail");
        }
        let generator = Arc::new(
            OpenAiGenerator::new(config.openai_api_key.clone().unwrap_or_default())
                .with_base_url(&config.openai_base_url)
                .with_settings(GenerationSettings::with_model(&config.openai_model)),
        );

        if config.unsplash_access_key.is_none() {
            tracing::warn!("UNSPLASH_ACCESS_KEY is not set; photo requests will fail");
        }
        let photos = Arc::new(
            UnsplashClient::new(config.unsplash_access_key.clone().unwrap_or_default())
                .with_base_url(&config.unsplash_base_url),
        );

        tracing::info!(
            openai = generator.base_url(),
            unsplash = photos.base_url(),
            "Configured upstream services"
        );

        Ok(Self::build(sqlite_repo, generator, photos))
    }
}

// ============================================================================
// Test support - fakes for the third-party services
// ============================================================================
