use axum::body::Body;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use common_services::api::auth::error::AuthError;
use common_services::database::tables::app_user::{User, UserRole};
use http::Request;

/// Gate layered over admin routes. Relies on [`ApiUser`] having run first
/// to populate the role extension; anything else is rejected.
///
/// [`ApiUser`]: crate::auth::middlewares::user::ApiUser
pub async fn require_role(
    State(required_role): State<UserRole>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let role = req
        .extensions()
        .get::<UserRole>()
        .ok_or(AuthError::UserNotFound)?;

    if *role != required_role {
        let user_email = req
            .extensions()
            .get::<User>()
            .map(|user| user.email.clone())
            .unwrap_or_default();
        return Err(AuthError::PermissionDenied {
            user_email,
            path: req.uri().to_string(),
        });
    }

    Ok(next.run(req).await)
}
