use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PoetryError {
    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),

    #[error("Poem not found: {0}")]
    PoemNotFound(Uuid),

    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for PoetryError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Database(_) | Self::Internal(_) => {
                error!("poetry failure: {self:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected internal error occurred.".to_string(),
                )
            }
            Self::PoemNotFound(id) => (StatusCode::NOT_FOUND, format!("Poem not found: {id}")),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for PoetryError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(e) => Self::Database(e),
            DbError::Migrate(e) => Self::Internal(eyre::Report::new(e)),
        }
    }
}
