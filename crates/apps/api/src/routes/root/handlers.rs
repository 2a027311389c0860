use axum::Json;
use axum::response::IntoResponse;
use http::header;
use serde_json::json;

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": "birthday-book-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Placeholder asset rendered for photos with no resolvable
/// representation. Embedded so it is always servable.
pub async fn placeholder() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        include_str!("../../../static/placeholder.svg"),
    )
}
