use crate::database::tables::app_user::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sign-up payload.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub email: String,
    #[schema(value_type = String, format = "password")]
    pub password: String,
}

/// Sign-in payload.
#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub email: String,
    #[schema(value_type = String, format = "password")]
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenPayload {
    pub refresh_token: String,
}

/// An access/refresh token pair.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    pub expiry: u64,
    pub access_token: String,
    pub refresh_token: String,
}

/// Claims carried in the access token JWT.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthClaims {
    /// Subject (user id).
    pub sub: i32,
    /// Expiration time (unix seconds).
    pub exp: i64,
    pub role: UserRole,
}

/// What a session knows about itself: identity plus the admin flag.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: i32,
    pub email: String,
    pub is_admin: bool,
}
