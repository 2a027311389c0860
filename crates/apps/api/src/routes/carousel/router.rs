use crate::api_state::ApiContext;
use crate::carousel::handlers::{focus_handler, frame_handler, next_handler, previous_handler};
use axum::{
    Router,
    routing::{get, post},
};

pub fn carousel_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/carousel/frame", get(frame_handler))
        .route("/carousel/next", post(next_handler))
        .route("/carousel/previous", post(previous_handler))
        .route("/carousel/focus/{slot}", post(focus_handler))
}
