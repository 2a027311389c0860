mod api_doc;
pub mod auth;
pub mod carousel;
pub mod guestbook;
pub mod photos;
pub mod poetry;
pub mod root;
pub mod settings;

use crate::api_state::ApiContext;
use crate::auth::middlewares::require_role::require_role;
use crate::auth::middlewares::user::ApiUser;
use crate::auth::router::{auth_protected_router, auth_public_router};
use crate::carousel::router::carousel_public_router;
use crate::guestbook::router::{guestbook_admin_router, guestbook_public_router};
use crate::photos::router::{photos_admin_router, photos_public_router};
use crate::poetry::router::{poetry_admin_router, poetry_public_router};
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use crate::settings::router::settings_admin_router;
use axum::Router;
use axum::middleware::{from_extractor_with_state, from_fn_with_state};
use common_services::database::tables::app_user::UserRole;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(public_routes())
        .merge(protected_routes(api_state.clone()))
        .merge(admin_routes(api_state.clone()))
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(auth_public_router())
        .merge(photos_public_router())
        .merge(carousel_public_router())
        .merge(guestbook_public_router())
        .merge(poetry_public_router())
}

fn protected_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(auth_protected_router())
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}

fn admin_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(photos_admin_router())
        .merge(guestbook_admin_router())
        .merge(poetry_admin_router())
        .merge(settings_admin_router())
        .route_layer(from_fn_with_state(UserRole::Admin, require_role))
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}
