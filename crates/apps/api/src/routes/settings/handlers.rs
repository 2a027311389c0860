use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::State;
use common_services::api::settings::error::SettingsError;
use common_services::api::settings::interfaces::{SystemSettings, UpdateSettings};
use tracing::instrument;

/// Current display settings.
#[utoipa::path(
    get,
    path = "/admin/settings",
    tag = "Admin",
    responses(
        (status = 200, description = "Current display settings.", body = SystemSettings),
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_settings_handler(State(context): State<ApiContext>) -> Json<SystemSettings> {
    Json(context.system_settings.load().await)
}

/// Saves display settings. Out-of-range values are clamped; the response
/// carries what was actually persisted.
#[utoipa::path(
    put,
    path = "/admin/settings",
    tag = "Admin",
    request_body = UpdateSettings,
    responses(
        (status = 200, description = "Settings saved (clamped).", body = SystemSettings),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context), err(Debug))]
pub async fn update_settings_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<UpdateSettings>,
) -> Result<Json<SystemSettings>, SettingsError> {
    let saved = context
        .system_settings
        .update_carousel_photos_count(payload.carousel_photos_count)
        .await?;
    Ok(Json(saved))
}
