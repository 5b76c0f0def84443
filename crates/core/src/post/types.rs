use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    /// Unique, URL-safe identity used in public links.
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub pub_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    /// Hero image URL. Stored as given, never validated.
    pub hero_image: Option<String>,
    /// Markdown body, usually machine generated.
    pub content: String,
    /// Drafts are excluded from the public listing.
    pub draft: bool,
}

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub hero_image: Option<String>,
    pub pub_date: DateTime<Utc>,
}

/// Full replacement of a post's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub hero_image: Option<String>,
    pub updated_date: DateTime<Utc>,
}
