//! Caller identity extractor.

use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Header carrying the authenticated caller's id.
///
/// Authentication happens upstream; the gateway stamps this header after
/// verifying the session and strips any client-supplied value.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the authenticated caller's user id.
///
/// Rejects with 401 when the header is absent or not a valid UUID, since
/// either means the request did not pass through the gateway.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AuthUserId;
///
/// async fn create_review(AuthUserId(user_id): AuthUserId) -> String {
///     format!("Review authored by {}", user_id)
/// }
/// ```
pub struct AuthUserId(pub Uuid);

impl<S> FromRequestParts<S> for AuthUserId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Unauthorized(format!("Missing {} header", USER_ID_HEADER))
                    .into_response()
            })?;

        match Uuid::parse_str(value) {
            Ok(user_id) => Ok(AuthUserId(user_id)),
            Err(_) => Err(AppError::Unauthorized(format!(
                "Invalid {} header: {}",
                USER_ID_HEADER, value
            ))
            .into_response()),
        }
    }
}
