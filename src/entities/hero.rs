//! Heroes: a fixed, read-only list of names
//!
//! - `GET /heroes`: every hero
//! - `GET /heroes/filter?name=`: heroes whose name matches ignoring case
//! - `GET /heroes/{name}`: the matching hero, or 404

use crate::core::entity::names_match;
use crate::core::error::{EntityError, ServiceError};
use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

pub const HEROES: [&str; 3] = ["Hero 01", "Hero 02", "Hero 03"];

#[derive(Debug, Deserialize)]
pub struct HeroFilter {
    pub name: Option<String>,
}

/// Heroes matching `name` ignoring case; no name matches nothing
pub fn filter(name: Option<&str>) -> Vec<&'static str> {
    let Some(name) = name else {
        return Vec::new();
    };
    HEROES
        .iter()
        .copied()
        .filter(|hero| names_match(hero, name))
        .collect()
}

pub fn find(name: &str) -> Option<&'static str> {
    filter(Some(name)).into_iter().next()
}

pub fn routes() -> Router {
    Router::new()
        .route("/heroes", get(list_heroes))
        .route("/heroes/filter", get(filter_heroes))
        .route("/heroes/{name}", get(find_hero))
}

async fn list_heroes() -> Json<Vec<&'static str>> {
    info!("listing heroes");
    Json(HEROES.to_vec())
}

async fn filter_heroes(Query(query): Query<HeroFilter>) -> Json<Vec<&'static str>> {
    info!(name = query.name.as_deref().unwrap_or_default(), "filtering heroes");
    Json(filter(query.name.as_deref()))
}

async fn find_hero(Path(name): Path<String>) -> Result<Json<&'static str>, ServiceError> {
    info!(name = %name, "finding hero");
    find(&name).map(Json).ok_or_else(|| {
        ServiceError::Entity(EntityError::NotFoundByName {
            entity_type: "Hero".to_string(),
            name,
        })
    })
}
