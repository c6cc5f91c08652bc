//! Generic CRUD handlers shared by every resource
//!
//! Each handler is instantiated per [`Mapper`], so the three resources share
//! one implementation of the request → validate → lookup → mutate → respond
//! flow.

use crate::core::Entity;
use crate::core::error::{ServiceError, ValidationError};
use crate::core::mapper::Mapper;
use crate::core::service::CrudService;
use crate::core::validation::Validated;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use std::collections::HashMap;
use tracing::info;

/// State handed to the handlers of one resource
pub struct CrudState<M: Mapper> {
    pub service: CrudService<M::Entity>,
    /// Query parameter carrying the collection name filter
    pub filter_param: &'static str,
}

impl<M: Mapper> Clone for CrudState<M> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            filter_param: self.filter_param,
        }
    }
}

/// Parse a numeric path id
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidId {
            value: raw.to_string(),
        })
}

/// GET /{plural}
pub async fn list<M: Mapper>(
    State(state): State<CrudState<M>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<M::GetResponse>>, ServiceError> {
    let filter = params.get(state.filter_param).map(String::as_str);
    info!(
        resource = M::Entity::resource_name(),
        filter = filter.unwrap_or_default(),
        "listing records"
    );

    let records = state.service.list(filter).await?;
    Ok(Json(M::to_get_responses(&records)))
}

/// GET /{plural}/{id}
pub async fn read<M: Mapper>(
    State(state): State<CrudState<M>>,
    Path(raw_id): Path<String>,
) -> Result<Json<M::GetResponse>, ServiceError> {
    let id = parse_id(&raw_id)?;
    info!(resource = M::Entity::resource_name(), id, "finding record");

    let record = state.service.find_by_id_or_not_found(id).await?;
    Ok(Json(M::to_get_response(&record)))
}

/// POST /{plural}
pub async fn create<M: Mapper>(
    State(state): State<CrudState<M>>,
    Validated(request): Validated<M::PostRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = state.service.next_id().await?;
    info!(resource = M::Entity::resource_name(), id, "creating record");

    let entity = M::from_post_request(request, id, Utc::now());
    let saved = state.service.save(entity).await?;

    Ok((StatusCode::CREATED, Json(M::to_post_response(&saved))))
}

/// PUT /{plural}
pub async fn update<M: Mapper>(
    State(state): State<CrudState<M>>,
    Validated(request): Validated<M::PutRequest>,
) -> Result<StatusCode, ServiceError> {
    let entity = M::from_put_request(request);
    info!(
        resource = M::Entity::resource_name(),
        id = entity.id(),
        "updating record"
    );

    state.service.update(entity).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /{plural}/{id}
pub async fn delete<M: Mapper>(
    State(state): State<CrudState<M>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    let id = parse_id(&raw_id)?;
    info!(resource = M::Entity::resource_name(), id, "deleting record");

    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
