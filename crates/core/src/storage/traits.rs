use async_trait::async_trait;

use crate::post::{NewPost, Post, PostUpdate};

use super::Result;

/// Repository for blog post operations.
///
/// Each method maps to a single SQL statement; nothing spans a transaction.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists every non-draft post, newest `pub_date` first.
    async fn list_published(&self) -> Result<Vec<Post>>;

    /// Inserts a new post and returns its generated id.
    async fn create_post(&self, post: &NewPost) -> Result<i64>;

    /// Replaces the mutable fields of a post.
    ///
    /// Returns `RepositoryError::NotFound` when no row has the given id.
    async fn update_post(&self, id: i64, update: &PostUpdate) -> Result<()>;

    /// Deletes a post by its id.
    ///
    /// Returns `RepositoryError::NotFound` when no row has the given id.
    async fn delete_post(&self, id: i64) -> Result<()>;
}
