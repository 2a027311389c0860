use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::auth::interfaces::{AuthClaims, CreateUser, SessionInfo, Tokens};
use crate::api::auth::token::{
    RefreshTokenParts, generate_refresh_token_parts, split_refresh_token, verify_token,
};
use crate::database::tables::app_user::{UserRole, UserWithPassword};
use crate::database::{AdminStore, UserStore};
use app_state::constants;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sqlx::{Executor, PgPool, Postgres};
use tracing::info;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Registers a new identity and runs the first-sign-up-wins admin bootstrap:
/// when no admin exists yet, a guarded insert claims the sole admin row for
/// this email. Under a concurrent race the database picks one winner; the
/// loser simply signs up as a regular guest.
///
/// # Errors
///
/// * `AuthError::InvalidEmail` / `AuthError::PasswordTooShort` on bad input.
/// * `AuthError::UserAlreadyExists` when the email is taken.
pub async fn register(pool: &PgPool, payload: &CreateUser) -> Result<SessionInfo, AuthError> {
    let email = payload.email.trim().to_lowercase();
    validate_email(&email)?;
    if payload.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }

    let hashed = hash_password(payload.password.as_bytes())?;
    let user = match UserStore::create(pool, &email, &hashed).await {
        Ok(user) => user,
        Err(crate::database::DbError::Sqlx(sqlx::Error::Database(db)))
            if db.is_unique_violation() =>
        {
            return Err(AuthError::UserAlreadyExists);
        }
        Err(e) => return Err(e.into()),
    };

    let claimed = AdminStore::claim_first_admin(pool, &email).await?;
    if claimed {
        info!(%email, "first sign-up claimed the admin flag");
    }
    let is_admin = claimed || AdminStore::is_admin(pool, &email).await?;

    Ok(SessionInfo {
        id: user.id,
        email: user.email,
        is_admin,
    })
}

/// Authenticates an email/password pair.
pub async fn authenticate_user(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<UserWithPassword, AuthError> {
    let user = UserStore::find_by_email_with_password(pool, &email.trim().to_lowercase())
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password.as_bytes(), &user.password)? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// Signs in: verifies credentials, derives the session role from the
/// `admin_user` membership, and issues an access/refresh token pair.
pub async fn login(
    pool: &PgPool,
    jwt_secret: &str,
    email: &str,
    password: &str,
) -> Result<Tokens, AuthError> {
    let user = authenticate_user(pool, email, password).await?;
    let role = session_role(pool, &user.email).await?;
    let (access_token, expiry) = create_access_token(jwt_secret, user.id, role)?;

    let parts = generate_refresh_token_parts()?;
    store_refresh_token(pool, user.id, &parts).await?;

    Ok(Tokens {
        expiry,
        access_token,
        refresh_token: parts.raw_token,
    })
}

/// Session role for an email: `Admin` iff it is in `admin_user`.
pub async fn session_role(pool: &PgPool, email: &str) -> Result<UserRole, AuthError> {
    Ok(if AdminStore::is_admin(pool, email).await? {
        UserRole::Admin
    } else {
        UserRole::Guest
    })
}

/// Creates a signed access token for a user id and role.
pub fn create_access_token(
    jwt_secret: &str,
    user_id: i32,
    role: UserRole,
) -> Result<(String, u64), AuthError> {
    let exp =
        (Utc::now() + Duration::minutes(constants().auth.access_token_expiry_minutes)).timestamp();
    let claims = AuthClaims {
        sub: user_id,
        exp,
        role,
    };
    let access_token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )?;

    Ok((access_token, exp.unsigned_abs()))
}

/// Persists a refresh token's storage parts.
pub async fn store_refresh_token<'c, E>(
    executor: E,
    user_id: i32,
    parts: &RefreshTokenParts,
) -> Result<(), AuthError>
where
    E: Executor<'c, Database = Postgres>,
{
    let expires_at = Utc::now() + Duration::days(constants().auth.refresh_token_expiry_days);
    sqlx::query(
        "INSERT INTO refresh_token (user_id, selector, verifier_hash, expires_at)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(&parts.selector)
    .bind(&parts.verifier_hash)
    .bind(expires_at)
    .execute(executor)
    .await?;
    Ok(())
}

/// Rotates a refresh token: the old one is invalidated in the same
/// transaction that stores its replacement.
pub async fn refresh_tokens(
    pool: &PgPool,
    jwt_secret: &str,
    raw_token: &str,
) -> Result<Tokens, AuthError> {
    let (selector, verifier_bytes) = split_refresh_token(raw_token)?;
    let record = sqlx::query_as::<_, (i32, String)>(
        "SELECT user_id, verifier_hash FROM refresh_token
         WHERE selector = $1 AND expires_at > NOW()",
    )
    .bind(&selector)
    .fetch_optional(pool)
    .await?
    .ok_or(AuthError::RefreshTokenExpiredOrNotFound)?;
    let (user_id, verifier_hash) = record;

    if !verify_token(&verifier_bytes, &verifier_hash)? {
        // Wrong verifier for a known selector smells like token theft;
        // drop every session for that user.
        sqlx::query("DELETE FROM refresh_token WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await
            .ok();
        return Err(AuthError::InvalidToken);
    }

    let user = UserStore::find_by_id(pool, user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;
    let role = session_role(pool, &user.email).await?;

    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM refresh_token WHERE selector = $1")
        .bind(&selector)
        .execute(&mut *tx)
        .await?;

    let new_parts = generate_refresh_token_parts()?;
    store_refresh_token(&mut *tx, user_id, &new_parts).await?;
    tx.commit().await?;

    let (access_token, expiry) = create_access_token(jwt_secret, user_id, role)?;
    Ok(Tokens {
        expiry,
        access_token,
        refresh_token: new_parts.raw_token,
    })
}

/// Signs out by deleting the matching refresh token. Always appears to
/// succeed so tokens cannot be enumerated.
pub async fn logout_user(pool: &PgPool, raw_token: &str) -> Result<(), AuthError> {
    if let Ok((selector, verifier_bytes)) = split_refresh_token(raw_token)
        && let Some((_, verifier_hash)) = sqlx::query_as::<_, (i32, String)>(
            "SELECT user_id, verifier_hash FROM refresh_token WHERE selector = $1",
        )
        .bind(&selector)
        .fetch_optional(pool)
        .await?
        && verify_token(&verifier_bytes, &verifier_hash).unwrap_or(false)
    {
        sqlx::query("DELETE FROM refresh_token WHERE selector = $1")
            .bind(&selector)
            .execute(pool)
            .await?;
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let well_formed = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });
    if well_formed {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_types::dev_constants::{EMAIL, GUEST_EMAIL};

    #[test]
    fn email_validation() {
        assert!(validate_email(EMAIL).is_ok());
        assert!(validate_email(GUEST_EMAIL).is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@nodot").is_err());
    }
}
