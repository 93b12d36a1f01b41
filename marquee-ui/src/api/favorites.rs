//! Favorites JSON API

use axum::{
    extract::{Path, State},
    Json,
};
use marquee_common::Favorites;
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppState;

/// Result of a toggle
#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub id: String,
    pub is_favorite: bool,
}

/// GET /api/favorites
///
/// The persisted favorites object, e.g. `{"tt0113277": true}`
pub async fn list_favorites(State(state): State<AppState>) -> ApiResult<Json<Favorites>> {
    Ok(Json(state.store.load_favorites().await?))
}

/// POST /api/favorites/:id
///
/// Flips the favorite flag of one movie
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FavoriteToggleResponse>> {
    let is_favorite = state.store.toggle_favorite(&id).await?;
    Ok(Json(FavoriteToggleResponse {
        id: id.trim().to_string(),
        is_favorite,
    }))
}
