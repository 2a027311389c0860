use crate::api_state::ApiContext;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use color_eyre::eyre::eyre;
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::AuthClaims;
use http::header;
use jsonwebtoken::{DecodingKey, Validation, decode};

/// Pulls the bearer token out of the Authorization header.
pub fn extract_token(parts: &Parts) -> Result<String, AuthError> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(ToString::to_string)
        .ok_or(AuthError::InvalidToken)
}

/// Recovers the `ApiContext` from the request state.
pub async fn extract_context<S>(parts: &mut Parts, state: &S) -> Result<ApiContext, AuthError>
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    State::from_request_parts(parts, state)
        .await
        .map(|State(context)| context)
        .map_err(|_| AuthError::Internal(eyre!("api context missing from request state")))
}

/// Decodes and validates an access token.
pub fn decode_token(token: &str, jwt_secret: &str) -> Result<AuthClaims, AuthError> {
    let data = decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
