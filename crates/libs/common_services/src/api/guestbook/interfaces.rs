use crate::database::tables::message::Message;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A public guestbook submission. Enters moderation unapproved.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessage {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPayload {
    pub approved: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = MessageVisibilityPayload)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityPayload {
    pub visible: bool,
}

/// The currently displayed guestbook card.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookCard {
    pub message: Option<Message>,
    /// False during the fade-out gap between two messages.
    pub visible: bool,
    pub current_index: usize,
    pub total: usize,
}
