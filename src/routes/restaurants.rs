use axum::{Json, extract::State};
use safeplate_dataset::{BoundingBox, Restaurant, RestaurantFilter};
use serde::{Deserialize, Serialize};

use super::{AppState, extract::QueryParams};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct RestaurantsQuery {
    pub city: Option<String>,
    /// `west,south,east,north`
    pub bbox: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RestaurantsResponse {
    pub restaurants: Vec<Restaurant>,
}

impl RestaurantsQuery {
    pub fn filter(&self) -> Result<RestaurantFilter, AppError> {
        let bbox = match self.bbox.as_deref().map(str::trim) {
            Some(bbox) if !bbox.is_empty() => Some(bbox.parse::<BoundingBox>()?),
            _ => None,
        };

        Ok(RestaurantFilter {
            city: self.city.clone().filter(|city| !city.trim().is_empty()),
            bbox,
        })
    }
}

/// GET /api/restaurants?city=&bbox=
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<RestaurantsQuery>,
) -> Result<Json<RestaurantsResponse>, AppError> {
    let filter = query.filter()?;

    Ok(Json(RestaurantsResponse {
        restaurants: state
            .dataset
            .restaurants_in(&filter)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_params_do_not_filter() {
        let query = RestaurantsQuery {
            city: Some("  ".into()),
            bbox: Some("".into()),
        };

        let filter = query.filter().unwrap();
        assert!(filter.city.is_none());
        assert!(filter.bbox.is_none());
    }

    #[test]
    fn test_malformed_bbox_is_bad_request() {
        let query = RestaurantsQuery {
            city: None,
            bbox: Some("1,2".into()),
        };

        assert!(matches!(query.filter(), Err(AppError::BoundingBox(_))));
    }
}
