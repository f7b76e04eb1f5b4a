use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

/// Error kinds surfaced by the product catalog.
///
/// `InvalidInput` and `Validation` are client mistakes caught before the
/// store is touched, `NotFound` reports a missing entity, and `Store`
/// wraps every backend failure (connection, constraint, decode).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            // Cause is logged by the service that hit it
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error occurred".to_string(),
                None,
            ),
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::InvalidInput(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
