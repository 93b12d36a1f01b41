//! Browser page and its form posts
//!
//! The current query lives in the page URL (`/?query=...`) so a results page
//! can be bookmarked or shared. Every form post redirects back to that URL.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use marquee_common::SortOrder;
use serde::Deserialize;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::render::PageView;
use crate::AppState;

/// Query string of the page, and body of the search and favorite forms
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}

/// Body of the sort form
#[derive(Debug, Deserialize)]
pub struct SortForm {
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub query: String,
}

/// URL of the page for `query`
pub fn page_location(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?query={}", urlencoding::encode(query))
    }
}

fn render(state: &AppState, page: &PageView, status: StatusCode) -> ApiResult<Response> {
    let html = state.renderer.render_page(page)?;
    Ok((status, Html(html)).into_response())
}

/// Page with an error banner for a rejected form post
async fn render_rejected(state: &AppState, query: &str, err: ApiError) -> ApiResult<Response> {
    warn!(query = %query, "Form post rejected: {}", err);
    let message = match &err {
        ApiError::Common(e) => e.to_string(),
        other => other.to_string(),
    };
    let sort = state.store.load_sort().await.unwrap_or_default();
    render(state, &PageView::failed(query.trim(), sort, message), err.status())
}

/// GET /?query=heat
///
/// Renders the page. A query in the URL is searched on load (or served from
/// the last result list); sort and favorites come from storage.
pub async fn serve_index(
    State(state): State<AppState>,
    Query(params): Query<QueryForm>,
) -> ApiResult<Response> {
    let query = params.query.trim();
    let sort = state.store.load_sort().await?;

    if query.is_empty() {
        let page = PageView {
            sort,
            ..Default::default()
        };
        return render(&state, &page, StatusCode::OK);
    }

    let favorites = state.store.load_favorites().await?;

    match state.search.cached_or_run(query).await {
        Ok(movies) => render(
            &state,
            &PageView::results(query, movies, sort, &favorites),
            StatusCode::OK,
        ),
        Err(e) => {
            warn!(query = %query, "Search failed: {}", e);
            render(
                &state,
                &PageView::failed(query, sort, format!("Search failed: {}", e)),
                StatusCode::BAD_GATEWAY,
            )
        }
    }
}

/// POST /search
///
/// GO button or Enter in the search box: always runs a fresh search.
pub async fn submit_search(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> ApiResult<Response> {
    let query = form.query.trim();
    if query.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    match state.search.run(query).await {
        Ok(_) => Ok(Redirect::to(&page_location(query)).into_response()),
        Err(e) => {
            warn!(query = %query, "Search failed: {}", e);
            let sort = state.store.load_sort().await?;
            render(
                &state,
                &PageView::failed(query, sort, format!("Search failed: {}", e)),
                StatusCode::BAD_GATEWAY,
            )
        }
    }
}

/// POST /sort
///
/// An unknown option re-renders the page with a 400 banner.
pub async fn submit_sort(
    State(state): State<AppState>,
    Form(form): Form<SortForm>,
) -> ApiResult<Response> {
    let saved = match form.sort.parse::<SortOrder>() {
        Ok(sort) => state.store.save_sort(sort).await,
        Err(e) => Err(e),
    };

    match saved {
        Ok(()) => Ok(Redirect::to(&page_location(&form.query)).into_response()),
        Err(e) => render_rejected(&state, &form.query, e.into()).await,
    }
}

/// POST /favorites/:id
pub async fn submit_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<QueryForm>,
) -> ApiResult<Response> {
    match state.store.toggle_favorite(&id).await {
        Ok(_) => Ok(Redirect::to(&page_location(&form.query)).into_response()),
        Err(e) => render_rejected(&state, &form.query, e.into()).await,
    }
}
