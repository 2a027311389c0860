use crate::api::guestbook::error::GuestbookError;
use crate::api::guestbook::interfaces::SubmitMessage;
use crate::database::MessageStore;
use crate::database::tables::message::Message;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

const MAX_NAME_LENGTH: usize = 100;
const MAX_MESSAGE_LENGTH: usize = 1000;

/// Stores a public guestbook submission. It enters moderation unapproved
/// and stays out of the rotation until an admin approves it.
pub async fn submit_message(
    pool: &PgPool,
    payload: &SubmitMessage,
) -> Result<Message, GuestbookError> {
    let (name, message) = validate_submission(&payload.name, &payload.message)?;
    let created = MessageStore::create(pool, &name, &message, false).await?;
    info!(id = %created.id, "guestbook message submitted for moderation");
    Ok(created)
}

/// Stores an admin-authored message, pre-approved.
pub async fn create_admin_message(
    pool: &PgPool,
    payload: &SubmitMessage,
) -> Result<Message, GuestbookError> {
    let (name, message) = validate_submission(&payload.name, &payload.message)?;
    Ok(MessageStore::create(pool, &name, &message, true).await?)
}

pub async fn set_message_approval(
    pool: &PgPool,
    id: Uuid,
    approved: bool,
) -> Result<(), GuestbookError> {
    if MessageStore::set_approved(pool, id, approved).await? {
        Ok(())
    } else {
        Err(GuestbookError::MessageNotFound(id))
    }
}

pub async fn set_message_visibility(
    pool: &PgPool,
    id: Uuid,
    visible: bool,
) -> Result<(), GuestbookError> {
    if MessageStore::set_visibility(pool, id, visible).await? {
        Ok(())
    } else {
        Err(GuestbookError::MessageNotFound(id))
    }
}

pub async fn delete_message(pool: &PgPool, id: Uuid) -> Result<(), GuestbookError> {
    if MessageStore::delete(pool, id).await? {
        Ok(())
    } else {
        Err(GuestbookError::MessageNotFound(id))
    }
}

fn validate_submission(name: &str, message: &str) -> Result<(String, String), GuestbookError> {
    let name = name.trim();
    let message = message.trim();

    if message.is_empty() {
        return Err(GuestbookError::Validation("Message cannot be empty.".into()));
    }
    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(GuestbookError::Validation(format!(
            "Message is longer than {MAX_MESSAGE_LENGTH} characters."
        )));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(GuestbookError::Validation(format!(
            "Name is longer than {MAX_NAME_LENGTH} characters."
        )));
    }

    let name = if name.is_empty() { "Anônimo" } else { name };
    Ok((name.to_string(), message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_rejected() {
        assert!(validate_submission("Maria", "   ").is_err());
    }

    #[test]
    fn blank_name_becomes_anonymous() {
        let (name, message) = validate_submission("  ", "Parabéns!").unwrap();
        assert_eq!(name, "Anônimo");
        assert_eq!(message, "Parabéns!");
    }

    #[test]
    fn oversized_fields_are_rejected() {
        assert!(validate_submission(&"n".repeat(101), "oi").is_err());
        assert!(validate_submission("Maria", &"m".repeat(1001)).is_err());
    }
}
