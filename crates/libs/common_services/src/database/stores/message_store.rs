use crate::database::DbError;
use crate::database::tables::message::Message;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

const MESSAGE_COLUMNS: &str = "id, name, message, is_approved, is_visible, created_at";

pub struct MessageStore;

impl MessageStore {
    /// Messages eligible for public rotation: approved and visible.
    pub async fn list_public(
        executor: impl Executor<'_, Database = Postgres>,
    ) -> Result<Vec<Message>, DbError> {
        Ok(sqlx::query_as::<_, Message>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM message
             WHERE is_approved AND is_visible
             ORDER BY created_at ASC"
        ))
        .fetch_all(executor)
        .await?)
    }

    /// Every message, newest first (admin moderation listing).
    pub async fn list_all(
        executor: impl Executor<'_, Database = Postgres>,
    ) -> Result<Vec<Message>, DbError> {
        Ok(sqlx::query_as::<_, Message>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM message ORDER BY created_at DESC"
        ))
        .fetch_all(executor)
        .await?)
    }

    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        name: &str,
        message: &str,
        is_approved: bool,
    ) -> Result<Message, DbError> {
        Ok(sqlx::query_as::<_, Message>(&format!(
            "INSERT INTO message (name, message, is_approved)
             VALUES ($1, $2, $3)
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(name)
        .bind(message)
        .bind(is_approved)
        .fetch_one(executor)
        .await?)
    }

    pub async fn set_approved(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
        approved: bool,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE message SET is_approved = $1 WHERE id = $2")
            .bind(approved)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn set_visibility(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
        visible: bool,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE message SET is_visible = $1 WHERE id = $2")
            .bind(visible)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM message WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
