use axum::{Json, extract::State};
use safeplate_dataset::MenuItem;
use serde::{Deserialize, Serialize};

use super::{AppState, extract::QueryParams};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub id: String,
    pub name: String,
    pub city: String,
    pub menu: Vec<MenuItem>,
}

/// GET /api/menu?id=
pub async fn show(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MenuQuery>,
) -> Result<Json<MenuResponse>, AppError> {
    let restaurant = query
        .id
        .as_deref()
        .and_then(|id| state.dataset.restaurant(id))
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

    Ok(Json(MenuResponse {
        id: restaurant.id.clone(),
        name: restaurant.name.clone(),
        city: restaurant.city.clone(),
        menu: restaurant.menu.clone(),
    }))
}
