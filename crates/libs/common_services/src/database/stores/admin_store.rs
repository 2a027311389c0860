use crate::database::DbError;
use sqlx::{Executor, Postgres};

pub struct AdminStore;

impl AdminStore {
    /// Claims the sole admin row for `email` if no admin exists yet.
    ///
    /// The insert is guarded in a single statement, so the database decides
    /// the winner of two concurrent first sign-ups; the loser gets `false`
    /// and stays a regular user.
    pub async fn claim_first_admin(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            "INSERT INTO admin_user (email)
             SELECT $1 WHERE NOT EXISTS (SELECT 1 FROM admin_user)
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(email)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Whether `email` carries the admin flag.
    pub async fn is_admin(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<bool, DbError> {
        Ok(
            sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM admin_user WHERE email = $1)",
            )
            .bind(email)
            .fetch_one(executor)
            .await?,
        )
    }
}
