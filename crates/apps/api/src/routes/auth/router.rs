use crate::api_state::ApiContext;
use crate::auth::handlers::{
    login_handler, logout_handler, me_handler, refresh_handler, register_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

pub fn auth_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_handler))
}

pub fn auth_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/auth/me", get(me_handler))
        .route("/auth/logout", post(logout_handler))
}
