//! Axum extractor for validated request bodies
//!
//! `Validated<T>` deserializes the JSON body into `T` and runs its
//! `validator` rules before the handler sees it. Both failures surface as
//! `400` with the catalog error body.

use crate::core::error::{ServiceError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor that validates request payloads
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_anime(
///     Validated(request): Validated<AnimePostRequest>,
/// ) -> Result<Json<AnimePostResponse>, ServiceError> {
///     // request already passed every field rule
/// }
/// ```
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::InvalidJson {
                message: rejection.body_text(),
            })?;

        payload.validate()?;

        Ok(Validated(payload))
    }
}
