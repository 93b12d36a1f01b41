//! marquee-ui library - movie search web service
//!
//! Renders the search page, proxies the OMDb API and persists favorites and
//! the sort preference.

use std::sync::Arc;

use axum::Router;
use marquee_common::PreferenceStore;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod omdb;
pub mod render;
pub mod search;

use omdb::OmdbClient;
use render::Renderer;
use search::MovieSearch;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Favorites and sort preference
    pub store: PreferenceStore,
    /// Fetch orchestrator holding the last result list
    pub search: Arc<MovieSearch>,
    /// Page template environment
    pub renderer: Arc<Renderer>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        db: SqlitePool,
        omdb: OmdbClient,
        result_count: usize,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            store: PreferenceStore::new(db),
            search: Arc::new(MovieSearch::new(omdb, result_count)),
            renderer: Arc::new(Renderer::new()?),
        })
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    // Browser pages and form posts
    let pages = Router::new()
        .route("/", get(api::serve_index))
        .route("/search", post(api::submit_search))
        .route("/sort", post(api::submit_sort))
        .route("/favorites/:id", post(api::submit_favorite));

    // JSON API
    let json_api = Router::new()
        .route("/api/search", get(api::search_movies))
        .route("/api/favorites", get(api::list_favorites))
        .route("/api/favorites/:id", post(api::toggle_favorite))
        .route("/api/sort", get(api::get_sort).put(api::set_sort));

    Router::new()
        .merge(pages)
        .merge(json_api)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
