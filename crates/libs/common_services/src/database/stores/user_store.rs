use crate::database::DbError;
use crate::database::tables::app_user::{User, UserWithPassword};
use sqlx::{Executor, Postgres};

const USER_COLUMNS: &str = "id, created_at, updated_at, email";

pub struct UserStore;

impl UserStore {
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, DbError> {
        Ok(sqlx::query_as::<_, User>(&format!(
            "INSERT INTO app_user (email, password)
             VALUES ($1, $2)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(hashed_password)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<User>, DbError> {
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM app_user WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(executor)
        .await?)
    }

    pub async fn find_by_email_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        Ok(sqlx::query_as::<_, UserWithPassword>(&format!(
            "SELECT {USER_COLUMNS}, password FROM app_user WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(executor)
        .await?)
    }
}
