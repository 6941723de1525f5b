use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::charts::png::PngError;

/// Internal faults only. External-data problems never reach this type;
/// they are absorbed into the fallback table before a response is built.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),
    #[error("Chart rendering failed: {0}")]
    Chart(#[from] PngError),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template rendering failed: {e}"),
            ),
            AppError::Chart(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Chart rendering failed: {e}"),
            ),
            AppError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({ "error": error_message }))).into_response()
    }
}
