//! Movie search JSON API

use axum::{
    extract::{Query, State},
    Json,
};
use marquee_common::{Movie, SortOrder};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Movie record plus its favorite flag
#[derive(Debug, Serialize)]
pub struct MovieView {
    #[serde(flatten)]
    pub movie: Movie,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub sort: SortOrder,
    pub count: usize,
    pub movies: Vec<MovieView>,
}

/// GET /api/search?query=heat
///
/// Runs a fresh search and returns the details of the top hits, ordered by
/// the stored sort preference.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Empty search query".to_string()));
    }

    let mut movies = state.search.run(query).await?;
    let sort = state.store.load_sort().await?;
    let favorites = state.store.load_favorites().await?;

    sort.apply(&mut movies);

    let movies: Vec<MovieView> = movies
        .into_iter()
        .map(|movie| MovieView {
            is_favorite: favorites.is_favorite(&movie.imdb_id),
            movie,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: query.to_string(),
        sort,
        count: movies.len(),
        movies,
    }))
}
