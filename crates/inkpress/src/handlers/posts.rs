//! Post CRUD handlers.
//!
//! These handlers use the repository trait object from `AppState` for
//! database access. Each one runs at most one SQL statement.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use inkpress_core::post::{generation_prompt, CreatePostRequest, Post, UpdatePostRequest};
use inkpress_core::storage::RepositoryError;

use super::{error::POST_NOT_FOUND, ApiError};
use crate::state::AppState;

/// Response body for a created post.
#[derive(Debug, Serialize)]
pub struct CreatedPost {
    pub id: i64,
}

/// Response body for successful updates and deletes.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Parse a JSON request body.
///
/// The Content-Type header is not checked. A body that is not valid JSON
/// fails the whole operation with its generic message.
fn parse_body<T: DeserializeOwned>(body: &[u8], message: &'static str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::internal(message, e))
}

/// Post ids arrive as text; anything that is not an integer cannot match a row.
fn parse_post_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(POST_NOT_FOUND))
}

/// Map a repository error for an id-targeted statement.
fn map_targeted_error(err: RepositoryError, message: &'static str) -> ApiError {
    if err.is_not_found() {
        ApiError::NotFound(POST_NOT_FOUND)
    } else {
        ApiError::internal(message, err)
    }
}

// ============================================================================
// List Posts
// ============================================================================

/// List published posts, newest first (GET /api/posts).
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state
        .post_repo
        .list_published()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch posts", e))?;

    Ok(Json(posts))
}

// ============================================================================
// Create Post
// ============================================================================

/// Create a post with a generated body (POST /api/posts).
///
/// The body is generated before the insert and the two steps are not
/// transactional: if the insert fails the generated text is discarded.
pub async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedPost>), ApiError> {
    const FAILED: &str = "Failed to create post";

    let payload: CreatePostRequest = parse_body(&body, FAILED)?;
    let input = payload.validate()?;

    tracing::debug!(slug = %input.slug, "Generating post content");

    let prompt = generation_prompt(&input.title, input.description.as_deref());
    let content = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| ApiError::internal(FAILED, e))?;

    let post = input.into_new_post(content, Utc::now());
    let id = state
        .post_repo
        .create_post(&post)
        .await
        .map_err(|e| ApiError::internal(FAILED, e))?;

    tracing::info!(post_id = id, slug = %post.slug, "Created new post");

    Ok((StatusCode::CREATED, Json(CreatedPost { id })))
}

// ============================================================================
// Update Post
// ============================================================================

/// Replace a post's mutable fields (PUT /api/posts/{id}).
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Success>, ApiError> {
    const FAILED: &str = "Failed to update post";

    let payload: UpdatePostRequest = parse_body(&body, FAILED)?;
    let update = payload.validate(Utc::now())?;
    let id = parse_post_id(&id)?;

    state
        .post_repo
        .update_post(id, &update)
        .await
        .map_err(|e| map_targeted_error(e, FAILED))?;

    tracing::info!(post_id = id, slug = %update.slug, "Updated post");

    Ok(Success::ok())
}

// ============================================================================
// Delete Post
// ============================================================================

/// Delete a post by id (DELETE /api/posts/{id}).
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success>, ApiError> {
    let id = parse_post_id(&id)?;

    state
        .post_repo
        .delete_post(id)
        .await
        .map_err(|e| map_targeted_error(e, "Failed to delete post"))?;

    tracing::info!(post_id = id, "Deleted post");

    Ok(Success::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("42").unwrap(), 42);
        assert!(matches!(parse_post_id("abc"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_post_id(""), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_parse_body() {
        let request: CreatePostRequest =
            parse_body(br#"{"title":"Hello","slug":"hello"}"#, "Failed").unwrap();
        assert_eq!(request.slug.as_deref(), Some("hello"));

        let error =
            parse_body::<CreatePostRequest>(b"{not json", "Failed to create post").unwrap_err();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Failed to create post");

        let empty = parse_body::<UpdatePostRequest>(b"", "Failed to update post").unwrap_err();
        assert_eq!(empty.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_map_targeted_error() {
        let not_found = map_targeted_error(RepositoryError::post_not_found(1), "Failed");
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let other = map_targeted_error(
            RepositoryError::AlreadyExists {
                entity_type: "Post",
                id: "taken".to_string(),
            },
            "Failed to update post",
        );
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(other.to_string(), "Failed to update post");
    }
}
