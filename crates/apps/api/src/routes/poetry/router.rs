use crate::api_state::ApiContext;
use crate::poetry::handlers::{add_poem_handler, delete_poem_handler, list_poems_handler};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn poetry_public_router() -> Router<ApiContext> {
    Router::new().route("/poems", get(list_poems_handler))
}

pub fn poetry_admin_router() -> Router<ApiContext> {
    Router::new()
        .route("/admin/poems", post(add_poem_handler))
        .route("/admin/poems/{id}", delete(delete_poem_handler))
}
