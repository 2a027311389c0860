use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A guestbook message. Approval and visibility are independent flags:
/// public rotation requires both.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub is_approved: bool,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.is_approved && self.is_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(is_approved: bool, is_visible: bool) -> Message {
        Message {
            id: Uuid::nil(),
            name: "Maria".into(),
            message: "Parabéns!".into(),
            is_approved,
            is_visible,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn public_requires_both_approval_and_visibility() {
        assert!(message(true, true).is_public());
        assert!(!message(false, true).is_public());
        assert!(!message(true, false).is_public());
        assert!(!message(false, false).is_public());
    }
}
