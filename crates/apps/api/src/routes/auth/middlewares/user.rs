use crate::auth::middlewares::common::{decode_token, extract_context, extract_token};
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use common_services::api::auth::error::AuthError;
use common_services::database::UserStore;
use common_services::database::tables::app_user::User;

use crate::api_state::ApiContext;

/// Extractor for authenticated routes: validates the access token, loads
/// the user, and stashes the user plus the token's role claim in request
/// extensions for downstream middleware and handlers.
#[derive(Clone, Debug)]
pub struct ApiUser(pub User);

impl<S> FromRequestParts<S> for ApiUser
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;
        let context = extract_context(parts, state).await?;
        let claims = decode_token(&token, &context.settings.secrets.jwt)?;
        let user = UserStore::find_by_id(&context.pool, claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        parts.extensions.insert(user.clone());
        parts.extensions.insert(claims.role);
        Ok(Self(user))
    }
}
