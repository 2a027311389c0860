use crate::api_state::ApiContext;
use crate::settings::handlers::{get_settings_handler, update_settings_handler};
use axum::{Router, routing::get};

pub fn settings_admin_router() -> Router<ApiContext> {
    Router::new().route(
        "/admin/settings",
        get(get_settings_handler).put(update_settings_handler),
    )
}
