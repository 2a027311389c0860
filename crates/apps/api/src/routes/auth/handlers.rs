use crate::api_state::ApiContext;
use axum::extract::State;
use axum::{Extension, Json};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::{
    CreateUser, LoginUser, RefreshTokenPayload, SessionInfo, Tokens,
};
use common_services::api::auth::service::{login, logout_user, refresh_tokens, register};
use common_services::database::tables::app_user::{User, UserRole};
use http::StatusCode;
use tracing::instrument;

/// Sign up. The first identity ever registered becomes the sole admin
/// (first-sign-up-wins); everyone after that is a guest.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = CreateUser,
    responses(
        (status = 200, description = "Account created.", body = SessionInfo),
        (status = 409, description = "Email already registered."),
        (status = 422, description = "Malformed email or password."),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn register_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<CreateUser>,
) -> Result<Json<SessionInfo>, AuthError> {
    let session = register(&context.pool, &payload).await?;
    Ok(Json(session))
}

/// Sign in with email and password.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Signed in.", body = Tokens),
        (status = 401, description = "Invalid email or password."),
    )
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn login_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<LoginUser>,
) -> Result<Json<Tokens>, AuthError> {
    let tokens = login(
        &context.pool,
        &context.settings.secrets.jwt,
        &payload.email,
        &payload.password,
    )
    .await?;
    Ok(Json(tokens))
}

/// Rotate a refresh token into a fresh token pair.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = "Auth",
    request_body = RefreshTokenPayload,
    responses(
        (status = 200, description = "Tokens rotated.", body = Tokens),
        (status = 401, description = "Refresh token invalid or expired."),
    )
)]
pub async fn refresh_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<RefreshTokenPayload>,
) -> Result<Json<Tokens>, AuthError> {
    let tokens = refresh_tokens(
        &context.pool,
        &context.settings.secrets.jwt,
        &payload.refresh_token,
    )
    .await?;
    Ok(Json(tokens))
}

/// The current session: identity plus the admin flag.
pub async fn me_handler(
    Extension(user): Extension<User>,
    Extension(role): Extension<UserRole>,
) -> Json<SessionInfo> {
    Json(SessionInfo {
        id: user.id,
        email: user.email,
        is_admin: role == UserRole::Admin,
    })
}

/// Sign out by invalidating the refresh token.
pub async fn logout_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<RefreshTokenPayload>,
) -> Result<StatusCode, AuthError> {
    logout_user(&context.pool, &payload.refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}
