use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Session not found")]
    NotFound,

    #[error("User ID is required")]
    MissingUserId,

    #[error("Storage error: {0}")]
    Storage(#[from] redis::RedisError),

    #[error("Malformed document: {0}")]
    Document(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MissingUserId => StatusCode::BAD_REQUEST,
            AppError::Storage { .. } | AppError::Document { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
