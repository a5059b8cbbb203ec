use axum::{Json, extract::State};
use safeplate_dataset::DatasetCounts;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct DatasetResponse {
    pub ok: bool,
    pub counts: DatasetCounts,
}

/// GET /api/dataset
pub async fn counts(State(state): State<AppState>) -> Json<DatasetResponse> {
    Json(DatasetResponse {
        ok: true,
        counts: state.dataset.counts(),
    })
}
