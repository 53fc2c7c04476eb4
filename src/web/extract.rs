//! Extractors whose rejections answer with the JSON error body.

use axum::async_trait;
use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::WebError;

/// Error label for a path or form that could not be extracted.
pub const INVALID_REQUEST: &str = "invalid_request";

/// Numeric row id taken from the single `:id` path segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| WebError::BadRequest {
                error: INVALID_REQUEST,
                details: Some(rejection.body_text()),
            })?;
        Ok(Self(id))
    }
}

/// URL-encoded form body
#[derive(Debug)]
pub struct FormBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| WebError::BadRequest {
                error: INVALID_REQUEST,
                details: Some(rejection.body_text()),
            })?;
        Ok(Self(value))
    }
}
