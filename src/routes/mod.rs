use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use safeplate_dataset::Dataset;

use crate::config::Config;

mod check;
mod dataset;
mod extract;
mod health;
mod menu;
mod restaurants;
mod search;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Self {
            config,
            dataset: Arc::new(dataset),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/dataset", get(dataset::counts))
        .route("/api/restaurants", get(restaurants::list))
        .route("/api/menu", get(menu::show))
        .route("/api/check", post(check::action))
        .route("/api/search", get(search::search))
        .route("/api/rank", post(search::rank))
        .with_state(app_state)
}
