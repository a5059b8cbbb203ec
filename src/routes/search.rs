use axum::{Json, extract::State};
use safeplate_search::{RankedResult, SearchQuery, rank_with};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AppState,
    extract::{JsonBody, QueryParams},
};

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RankedResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub candidates: Vec<Value>,
    #[serde(flatten)]
    pub query: SearchQuery,
}

/// GET /api/search?q=&cuisine=&limit= over the dataset's restaurants
pub async fn search(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Json<SearchResponse> {
    let candidates = state.dataset.candidates();

    Json(SearchResponse {
        results: rank_with(&candidates, &query, &state.config.search),
    })
}

/// POST /api/rank over caller-supplied candidate records
pub async fn rank(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RankRequest>,
) -> Json<SearchResponse> {
    Json(SearchResponse {
        results: rank_with(&input.candidates, &input.query, &state.config.search),
    })
}
