//! JSON body extractor that rejects with the error envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use catalog_core::error::AppError;

use crate::error::ApiError;

pub const INVALID_INPUT: &str = "Invalid input";

/// Deserializes the request body as JSON regardless of `Content-Type`.
///
/// A body that cannot be read or decoded ends the request with
/// 400 `Invalid input`; the handler never runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Failed to read request body");
            AppError::validation(INVALID_INPUT)
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Malformed JSON body");
            AppError::validation(INVALID_INPUT).into()
        })
    }
}
