use crate::database::DbError;
use crate::database::tables::poem::Poem;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

const POEM_COLUMNS: &str = "id, title, content, created_at";

pub struct PoemStore;

impl PoemStore {
    pub async fn list(
        executor: impl Executor<'_, Database = Postgres>,
    ) -> Result<Vec<Poem>, DbError> {
        Ok(sqlx::query_as::<_, Poem>(&format!(
            "SELECT {POEM_COLUMNS} FROM poem ORDER BY created_at ASC"
        ))
        .fetch_all(executor)
        .await?)
    }

    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        title: &str,
        content: &str,
    ) -> Result<Poem, DbError> {
        Ok(sqlx::query_as::<_, Poem>(&format!(
            "INSERT INTO poem (title, content)
             VALUES ($1, $2)
             RETURNING {POEM_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .fetch_one(executor)
        .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        id: Uuid,
    ) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM poem WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
