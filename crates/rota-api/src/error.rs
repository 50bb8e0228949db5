use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use rota_types::api::ErrorResponse;

/// Everything a rota operation can fail with, mapped straight onto HTTP
/// statuses. Store failures carry the raw driver message through to the body.
#[derive(Debug, Error)]
pub enum RotaError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid item ID")]
    InvalidId,

    #[error("Item not found")]
    NotFound,

    #[error("{0}")]
    Store(#[from] mongodb::error::Error),
}

impl RotaError {
    pub fn status(&self) -> StatusCode {
        match self {
            RotaError::Validation(_) | RotaError::InvalidId => StatusCode::BAD_REQUEST,
            RotaError::NotFound => StatusCode::NOT_FOUND,
            RotaError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RotaError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Store operation failed: {}", self);
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
