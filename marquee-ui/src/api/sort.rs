//! Sort preference JSON API

use axum::{extract::State, Json};
use marquee_common::SortOrder;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    /// Option key: "", yearAsc, yearDesc, ratingAsc or ratingDesc
    #[serde(default)]
    pub sort: String,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub sort: SortOrder,
    pub label: &'static str,
}

impl From<SortOrder> for SortResponse {
    fn from(sort: SortOrder) -> Self {
        Self {
            sort,
            label: sort.label(),
        }
    }
}

/// GET /api/sort
pub async fn get_sort(State(state): State<AppState>) -> ApiResult<Json<SortResponse>> {
    let sort = state.store.load_sort().await?;
    Ok(Json(sort.into()))
}

/// PUT /api/sort
///
/// Unknown keys are rejected with 400
pub async fn set_sort(
    State(state): State<AppState>,
    Json(request): Json<SortRequest>,
) -> ApiResult<Json<SortResponse>> {
    let sort: SortOrder = request.sort.parse()?;
    state.store.save_sort(sort).await?;
    Ok(Json(sort.into()))
}
