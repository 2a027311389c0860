use crate::api_state::ApiContext;
use crate::photos::handlers::{
    admin_list_photos_handler, delete_photo_handler, list_photos_handler,
    set_photo_visibility_handler, upload_photos_handler,
};
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{delete, get, patch},
};

const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn photos_public_router() -> Router<ApiContext> {
    Router::new().route("/photos", get(list_photos_handler))
}

pub fn photos_admin_router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/admin/photos",
            get(admin_list_photos_handler)
                .post(upload_photos_handler)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/admin/photos/{id}/visibility",
            patch(set_photo_visibility_handler),
        )
        .route("/admin/photos/{id}", delete(delete_photo_handler))
}
