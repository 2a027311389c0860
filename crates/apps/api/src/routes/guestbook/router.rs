use crate::api_state::ApiContext;
use crate::guestbook::handlers::{
    admin_create_message_handler, admin_list_messages_handler, current_card_handler,
    delete_message_handler, set_message_approval_handler, set_message_visibility_handler,
    submit_message_handler,
};
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

pub fn guestbook_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/guestbook/current", get(current_card_handler))
        .route("/guestbook/messages", post(submit_message_handler))
}

pub fn guestbook_admin_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/admin/messages",
            get(admin_list_messages_handler).post(admin_create_message_handler),
        )
        .route(
            "/admin/messages/{id}/approval",
            patch(set_message_approval_handler),
        )
        .route(
            "/admin/messages/{id}/visibility",
            patch(set_message_visibility_handler),
        )
        .route("/admin/messages/{id}", delete(delete_message_handler))
}
