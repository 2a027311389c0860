use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("A user with this email already exists.")]
    UserAlreadyExists,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("Password is too short.")]
    PasswordTooShort,

    #[error("Invalid or malformed token.")]
    InvalidToken,

    #[error("Refresh token expired or not found.")]
    RefreshTokenExpiredOrNotFound,

    #[error("User not found.")]
    UserNotFound,

    #[error("Admin privileges required for {path}.")]
    PermissionDenied { user_email: String, path: String },

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::RefreshTokenExpiredOrNotFound => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidEmail | Self::PasswordTooShort => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("auth failure: {self:?}");
        }

        // Auth failures surface verbatim so the sign-in form can show them.
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(e) => Self::Database(e),
            DbError::Migrate(e) => Self::Internal(eyre::Report::new(e)),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        Self::InvalidToken
    }
}
