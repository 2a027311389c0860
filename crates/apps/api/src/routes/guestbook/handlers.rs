use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::{Path, State};
use common_services::api::guestbook::error::GuestbookError;
use common_services::api::guestbook::interfaces::{
    ApprovalPayload, GuestbookCard, SubmitMessage, VisibilityPayload,
};
use common_services::api::guestbook::service::{
    create_admin_message, delete_message, set_message_approval, set_message_visibility,
    submit_message,
};
use common_services::database::MessageStore;
use common_services::database::tables::message::Message;
use http::StatusCode;
use tracing::{instrument, warn};
use uuid::Uuid;

/// The guestbook card currently in rotation.
#[utoipa::path(
    get,
    path = "/guestbook/current",
    tag = "Guestbook",
    responses(
        (status = 200, description = "Currently rotating message.", body = GuestbookCard),
    )
)]
pub async fn current_card_handler(State(context): State<ApiContext>) -> Json<GuestbookCard> {
    Json(context.guestbook.current_card().await)
}

/// Public message submission. Enters moderation unapproved and shows up in
/// the rotation only after an admin approves it.
#[utoipa::path(
    post,
    path = "/guestbook/messages",
    tag = "Guestbook",
    request_body = SubmitMessage,
    responses(
        (status = 200, description = "Message stored for moderation.", body = Message),
        (status = 422, description = "Empty or oversized fields."),
    )
)]
pub async fn submit_message_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<SubmitMessage>,
) -> Result<Json<Message>, GuestbookError> {
    let message = submit_message(&context.pool, &payload).await?;
    Ok(Json(message))
}

/// Admin moderation listing: every message, newest first.
#[utoipa::path(
    get,
    path = "/admin/messages",
    tag = "Admin",
    responses(
        (status = 200, description = "All messages, newest first.", body = [Message]),
    ),
    security(("bearer_auth" = []))
)]
#[instrument(skip(context), err(Debug))]
pub async fn admin_list_messages_handler(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<Message>>, GuestbookError> {
    Ok(Json(MessageStore::list_all(&context.pool).await?))
}

/// Admin-authored message; pre-approved and immediately eligible.
pub async fn admin_create_message_handler(
    State(context): State<ApiContext>,
    Json(payload): Json<SubmitMessage>,
) -> Result<Json<Message>, GuestbookError> {
    let message = create_admin_message(&context.pool, &payload).await?;
    refresh_after_mutation(&context).await;
    Ok(Json(message))
}

#[instrument(skip(context), err(Debug))]
pub async fn set_message_approval_handler(
    State(context): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApprovalPayload>,
) -> Result<StatusCode, GuestbookError> {
    set_message_approval(&context.pool, id, payload.approved).await?;
    refresh_after_mutation(&context).await;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(context), err(Debug))]
pub async fn set_message_visibility_handler(
    State(context): State<ApiContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VisibilityPayload>,
) -> Result<StatusCode, GuestbookError> {
    set_message_visibility(&context.pool, id, payload.visible).await?;
    refresh_after_mutation(&context).await;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(context), err(Debug))]
pub async fn delete_message_handler(
    State(context): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, GuestbookError> {
    delete_message(&context.pool, id).await?;
    refresh_after_mutation(&context).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn refresh_after_mutation(context: &ApiContext) {
    if let Err(e) = context.refresh_guestbook().await {
        warn!("guestbook reload after admin mutation failed: {e:?}");
    }
}
