use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use safeplate_dataset::{BoundingBoxError, DatasetError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid bbox: {0}")]
    BoundingBox(#[from] BoundingBoxError),

    #[error("{0}")]
    NotFound(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Internal server error")]
    InternalError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::BoundingBox(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Dataset(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::InternalError(detail) => {
                tracing::error!(error = %detail, "Request failed");
            }
            AppError::Dataset(error) => {
                tracing::error!(%error, "Request failed");
            }
            _ => tracing::debug!(%status, error = %self, "Request rejected"),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
