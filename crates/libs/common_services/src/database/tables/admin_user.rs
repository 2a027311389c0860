use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// An email granted the admin flag. Rows are created once during bootstrap
/// and never mutated through the UI.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct AdminUser {
    pub email: String,
    pub created_at: DateTime<Utc>,
}
