use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, State};
use common_services::api::poetry::error::PoetryError;
use common_services::api::poetry::interfaces::CreatePoem;
use common_services::api::poetry::service::{add_poem, delete_poem, list_shuffled};
use common_services::database::tables::poem::Poem;
use http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

/// Poems for the poetry display, shuffled per request so the section never
/// always opens on the same poem.
#[utoipa::path(
    get,
    path = "/poems",
    tag = "Poetry",
    responses(
        (status = 200, description = "All poems in a fresh shuffled order.", body = [Poem]),
    )
)]
pub async fn list_poems_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<Poem>>, PoetryError> {
    Ok(Json(list_shuffled(&context.pool).await?))
}

#[utoipa::path(
    post,
    path = "/admin/poems",
    tag = "Admin",
    request_body = CreatePoem,
    responses(
        (status = 200, description = "Poem stored.", body = Poem),
        (status = 422, description = "Empty content."),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context, payload), err(Debug))]
pub async fn add_poem_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<CreatePoem>,
) -> Result<Json<Poem>, PoetryError> {
    Ok(Json(add_poem(&context.pool, &payload).await?))
}

pub async fn delete_poem_handler(
    State(context): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, PoetryError> {
    delete_poem(&context.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
