//! Bearer token authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::domain::entities::UserId;
use crate::error::AppError;
use crate::AppState;

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Validates the access token and injects the User into request extensions.
/// Routes that require authentication should use this middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request).ok_or(AppError::Unauthorized)?;

    let claims = state.jwt.verify(token)?;

    // The token may outlive the account; require the user to still exist
    let user = state
        .account_service
        .find_by_id(&UserId(claims.sub))
        .await?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
