//! API request types for post operations.
//!
//! Every field is optional at the deserialization layer so that a missing
//! field is reported as a validation error rather than a body parse error.
//! Required fields treat an empty string as missing; optional fields are
//! kept exactly as sent. `validate` turns a payload into the typed input the
//! repository expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::PostError;
use super::types::{NewPost, PostUpdate};
use crate::serde::deserialize_optional_string;

/// Request payload for creating a new post (POST /api/posts).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
}

/// A create request whose required fields are present.
///
/// The body text is not part of the request; it is produced by the text
/// generator and supplied to [`CreatePostInput::into_new_post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostInput {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub hero_image: Option<String>,
}

impl CreatePostRequest {
    /// Create a request with the two required fields.
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            slug: Some(slug.into()),
            ..Default::default()
        }
    }

    /// Set the description used as context for generation.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the hero image URL.
    pub fn with_hero_image(mut self, hero_image: impl Into<String>) -> Self {
        self.hero_image = Some(hero_image.into());
        self
    }

    /// Checks that `title` and `slug` are present.
    pub fn validate(self) -> Result<CreatePostInput, PostError> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.slug.is_none() {
            missing.push("slug");
        }

        match (self.title, self.slug) {
            (Some(title), Some(slug)) => Ok(CreatePostInput {
                title,
                slug,
                description: self.description,
                hero_image: self.hero_image,
            }),
            _ => Err(PostError::MissingFields(missing)),
        }
    }
}

impl CreatePostInput {
    /// Combine the validated input with generated content and a publish date.
    pub fn into_new_post(self, content: String, pub_date: DateTime<Utc>) -> NewPost {
        NewPost {
            title: self.title,
            slug: self.slug,
            description: self.description,
            content,
            hero_image: self.hero_image,
            pub_date,
        }
    }
}

/// Request payload for replacing a post (PUT /api/posts/{id}).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
}

impl UpdatePostRequest {
    /// Checks that `title`, `slug` and `content` are present and stamps the
    /// update time.
    pub fn validate(self, updated_date: DateTime<Utc>) -> Result<PostUpdate, PostError> {
        let mut missing = Vec::new();
        if self.title.is_none() {
            missing.push("title");
        }
        if self.slug.is_none() {
            missing.push("slug");
        }
        if self.content.is_none() {
            missing.push("content");
        }

        match (self.title, self.slug, self.content) {
            (Some(title), Some(slug), Some(content)) => Ok(PostUpdate {
                title,
                slug,
                description: self.description,
                content,
                hero_image: self.hero_image,
                updated_date,
            }),
            _ => Err(PostError::MissingFields(missing)),
        }
    }
}
