//! Photo search handlers.
//!
//! Thin wrappers over the `PhotoProvider` in `AppState`; payloads are
//! forwarded untouched.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use inkpress_core::photos::PhotoSearchQuery;
use inkpress_core::serde::deserialize_optional_string;

use super::ApiError;
use crate::state::AppState;

/// Query parameters for a random photo.
#[derive(Debug, Default, Deserialize)]
pub struct RandomPhotoQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub query: Option<String>,
}

/// Search photos (GET /api/photos/search?query=&page=&perPage=).
pub async fn search_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotoSearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let search = query
        .into_search()
        .ok_or(ApiError::BadRequest("Query parameter is required"))?;

    let results = state
        .photos
        .search(&search)
        .await
        .map_err(|e| ApiError::internal("Failed to search photos", e))?;

    Ok(Json(results))
}

/// Fetch one random photo (GET /api/photos/random?query=).
pub async fn random_photo(
    State(state): State<AppState>,
    Query(query): Query<RandomPhotoQuery>,
) -> Result<Json<Value>, ApiError> {
    let photo = state
        .photos
        .random(query.query.as_deref())
        .await
        .map_err(|e| ApiError::internal("Failed to fetch random photo", e))?;

    Ok(Json(photo))
}

/// Fetch a photo by its provider id (GET /api/photos/{id}).
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let photo = state
        .photos
        .photo(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch photo", e))?;

    Ok(Json(photo))
}
