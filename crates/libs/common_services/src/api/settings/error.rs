use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error")]
    Io(#[from] std::io::Error),

    #[error("settings serialization error")]
    Serde(#[from] serde_json::Error),
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        error!("settings failure: {self:?}");
        let body = Json(json!({ "error": "Could not persist settings." }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
