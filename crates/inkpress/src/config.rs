use std::{env, time::Duration};

use crate::integrations::{openai, unsplash};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "blog.db")
    pub database_path: String,
    /// OpenAI API key used for post generation
    pub openai_api_key: Option<String>,
    /// OpenAI API root (default: "https://api.openai.com/v1")
    pub openai_base_url: String,
    /// Completion model (default: "gpt-3.5-turbo")
    pub openai_model: String,
    /// Unsplash access key used for photo search
    pub unsplash_access_key: Option<String>,
    /// Unsplash API root (default: "https://api.unsplash.com")
    pub unsplash_base_url: String,
    /// Whole-request timeout applied by the router in seconds (default: 60)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_PATH` - SQLite database path (default: "blog.db")
    /// - `OPENAI_API_KEY` - OpenAI API key (no default)
    /// - `OPENAI_BASE_URL` - OpenAI API root (default: "https://api.openai.com/v1")
    /// - `OPENAI_MODEL` - Completion model (default: "gpt-3.5-turbo")
    /// - `UNSPLASH_ACCESS_KEY` - Unsplash access key (no default)
    /// - `UNSPLASH_BASE_URL` - Unsplash API root (default: "https://api.unsplash.com")
    /// - `REQUEST_TIMEOUT_SECONDS` - Router timeout (default: 60)
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "blog.db".to_string()),
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| openai::DEFAULT_BASE_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            unsplash_access_key: non_empty_var("UNSPLASH_ACCESS_KEY"),
            unsplash_base_url: env::var("UNSPLASH_BASE_URL")
                .unwrap_or_else(|_| unsplash::DEFAULT_BASE_URL.to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
