use crate::database::DbError;
use crate::database::tables::photo::{CreatePhoto, Photo};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

const PHOTO_COLUMNS: &str = "id, filename, storage_path, original_data, thumbnail_data, \
     carousel_data, mime_type, file_size_bytes, is_visible, uploaded_at";

pub struct PhotoStore;

impl PhotoStore {
    /// Visible photos in public display order (oldest first).
    pub async fn list_public(
        executor: impl Executor<'_, Database = Postgres>,
    ) -> Result<Vec<Photo>, DbError> {
        Ok(sqlx::query_as::<_, Photo>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photo WHERE is_visible ORDER BY uploaded_at ASC"
        ))
        .fetch_all(executor)
        .await?)
    }

    /// Every photo regardless of visibility, newest first (admin listing).
    pub async fn list_all(
        executor: impl Executor<'_, Database = Postgres>,
    ) -> Result<Vec<Photo>, DbError> {
        Ok(sqlx::query_as::<_, Photo>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photo ORDER BY uploaded_at DESC"
        ))
        .fetch_all(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
    ) -> Result<Option<Photo>, DbError> {
        Ok(sqlx::query_as::<_, Photo>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM photo WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        photo: &CreatePhoto,
    ) -> Result<Photo, DbError> {
        Ok(sqlx::query_as::<_, Photo>(&format!(
            "INSERT INTO photo (filename, storage_path, original_data, thumbnail_data, \
             carousel_data, mime_type, file_size_bytes, is_visible)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {PHOTO_COLUMNS}"
        ))
        .bind(&photo.filename)
        .bind(&photo.storage_path)
        .bind(&photo.original_data)
        .bind(&photo.thumbnail_data)
        .bind(&photo.carousel_data)
        .bind(&photo.mime_type)
        .bind(photo.file_size_bytes)
        .bind(photo.is_visible)
        .fetch_one(executor)
        .await?)
    }

    /// Returns `false` when no row with `id` exists.
    pub async fn set_visibility(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
        visible: bool,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("UPDATE photo SET is_visible = $1 WHERE id = $2")
            .bind(visible)
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Deletes the row and returns it so the caller can release the
    /// associated storage object.
    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
    ) -> Result<Option<Photo>, DbError> {
        Ok(sqlx::query_as::<_, Photo>(&format!(
            "DELETE FROM photo WHERE id = $1 RETURNING {PHOTO_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?)
    }
}
