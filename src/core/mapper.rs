//! Conversions between wire shapes and entities

use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Binds an entity to its request and response shapes
///
/// Mappers are stateless; every function is pure. Server-assigned fields
/// (id, creation timestamp) are passed in by the caller on create.
pub trait Mapper: Send + Sync + 'static {
    type Entity: Entity;
    type PostRequest: DeserializeOwned + Validate + Send + 'static;
    type PutRequest: DeserializeOwned + Validate + Send + 'static;
    type GetResponse: Serialize + Send;
    type PostResponse: Serialize + Send;

    fn from_post_request(
        request: Self::PostRequest,
        id: i64,
        created_at: DateTime<Utc>,
    ) -> Self::Entity;

    /// The returned entity's `created_at` is a placeholder; the service
    /// replaces it with the stored record's timestamp.
    fn from_put_request(request: Self::PutRequest) -> Self::Entity;

    fn to_get_response(entity: &Self::Entity) -> Self::GetResponse;

    fn to_post_response(entity: &Self::Entity) -> Self::PostResponse;

    fn to_get_responses(entities: &[Self::Entity]) -> Vec<Self::GetResponse> {
        entities.iter().map(Self::to_get_response).collect()
    }
}
