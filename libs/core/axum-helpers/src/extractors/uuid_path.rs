//! UUID path parameter extractor with automatic validation.

use crate::errors::{AppError, ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// Parses the single path parameter of the route as a UUID and rejects
/// with `400 INVALID_UUID` otherwise.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::delete;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn delete_beer(UuidPath(id): UuidPath) -> String {
///     format!("Beer ID: {}", id)
/// }
///
/// let app = Router::new().route("/beers/{id}", delete(delete_beer));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                error_response(StatusCode::BAD_REQUEST, e.body_text(), ErrorCode::BadRequest)
            })?;

        Uuid::parse_str(&id)
            .map(UuidPath)
            .map_err(|e| AppError::UuidError(e).into_response())
    }
}
