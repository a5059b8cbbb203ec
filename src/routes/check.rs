use axum::{Json, extract::State};
use safeplate_classifier::classify_with;
use safeplate_dataset::MenuItem;
use safeplate_shared::{Profile, Verdict};
use serde::{Deserialize, Serialize};

use super::{AppState, extract::JsonBody};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct CheckRequest {
    #[serde(default, rename = "restaurantId", alias = "restaurant_id")]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub restaurant: String,
    pub item: MenuItem,
    pub result: Verdict,
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// POST /api/check
pub async fn action(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let (Some(restaurant_id), Some(sku)) = (
        required(input.restaurant_id.as_deref()),
        required(input.sku.as_deref()),
    ) else {
        return Err(AppError::BadRequest(
            "restaurantId and sku required".to_string(),
        ));
    };

    let restaurant = state
        .dataset
        .restaurant(restaurant_id)
        .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;
    let item = restaurant
        .menu_item(sku)
        .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))?;

    let profile = input.profile.clone().unwrap_or_default();
    let result = classify_with(
        &item.dish(),
        &profile,
        &state.dataset,
        &state.config.classifier,
    );

    tracing::info!(
        restaurant = %restaurant.id,
        sku = %item.sku,
        color = %result.color,
        "Menu item checked"
    );

    Ok(Json(CheckResponse {
        restaurant: restaurant.name.clone(),
        item: item.clone(),
        result,
    }))
}
