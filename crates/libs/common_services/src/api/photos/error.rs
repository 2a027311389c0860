use crate::database::DbError;
use crate::storage::StorageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PhotosError {
    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("Photo not found: {0}")]
    PhotoNotFound(Uuid),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

impl IntoResponse for PhotosError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A database error occurred.".to_string(),
            ),
            Self::Internal(_) | Self::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected internal error occurred.".to_string(),
            ),
            Self::PhotoNotFound(id) => (StatusCode::NOT_FOUND, format!("Photo not found: {id}")),
            Self::InvalidUpload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("photos failure: {self:?}");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for PhotosError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(e) => Self::Database(e),
            DbError::Migrate(e) => Self::Internal(eyre::Report::new(e)),
        }
    }
}

impl From<tokio::task::JoinError> for PhotosError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(eyre::Report::new(err))
    }
}
