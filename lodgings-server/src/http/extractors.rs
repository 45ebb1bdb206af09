//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::LodgingInput;

/// Extract a numeric lodging id from the path.
///
/// A non-numeric id segment is an unknown path (404, same body as the
/// router fallback), not a 400.
pub struct LodgingId(pub i64);

impl<S> FromRequestParts<S> for LodgingId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::path_not_found(path.clone()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::path_not_found(path))?;
        Ok(Self(id))
    }
}

/// Lodging request body.
///
/// A missing or unparseable body validates the same as an empty one, so
/// the client sees the required-fields message rather than a framework
/// rejection.
pub struct LodgingBody(pub LodgingInput);

impl<S> FromRequest<S> for LodgingBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let input = match Json::<LodgingInput>::from_request(req, state).await {
            Ok(Json(input)) => input,
            Err(_) => LodgingInput::default(),
        };
        Ok(Self(input))
    }
}
