//! Anime module: animes, producers and the hero list

use crate::config::ServiceConfig;
use crate::core::Entity;
use crate::core::auth::{ApiKey, Operation, PolicyGuard, enforce_policy};
use crate::core::error::{EntityError, ServiceError, ValidationError};
use crate::core::mapper::Mapper;
use crate::core::module::Module;
use crate::core::repository::Repository;
use crate::core::service::CrudService;
use crate::entities::anime::{Anime, AnimeGetResponse, AnimeMapper};
use crate::entities::hero;
use crate::entities::producer::{Producer, ProducerMapper};
use crate::server::entity_registry::{CrudDescriptor, EntityRegistry};
use crate::storage::InMemoryRepository;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

pub struct AnimeModule {
    animes: CrudService<Anime>,
    producers: CrudService<Producer>,
    config: ServiceConfig,
    api_key: Arc<ApiKey>,
}

impl AnimeModule {
    /// Build the module over in-memory stores, seeded when `config.seed` is set
    pub fn new(config: &ServiceConfig) -> Self {
        let (animes, producers) = if config.seed {
            (
                InMemoryRepository::with_seed(Anime::samples()),
                InMemoryRepository::with_seed(Producer::samples()),
            )
        } else {
            (InMemoryRepository::new(), InMemoryRepository::new())
        };
        Self::with_repositories(config, Arc::new(animes), Arc::new(producers))
    }

    /// Build the module over caller-provided repositories
    pub fn with_repositories(
        config: &ServiceConfig,
        animes: Arc<dyn Repository<Anime>>,
        producers: Arc<dyn Repository<Producer>>,
    ) -> Self {
        Self {
            animes: CrudService::new(animes),
            producers: CrudService::new(producers),
            config: config.clone(),
            api_key: Arc::new(config.api_key()),
        }
    }

    fn filter_routes(&self) -> Router {
        let guard = PolicyGuard::new(
            self.config
                .policies_for(Anime::resource_name())
                .policy(Operation::List),
            self.api_key.clone(),
        );

        Router::new()
            .route(
                "/animes/filter",
                get(filter_anime)
                    .route_layer(middleware::from_fn_with_state(guard, enforce_policy)),
            )
            .with_state(self.animes.clone())
    }
}

impl Module for AnimeModule {
    fn name(&self) -> &str {
        "anime-service"
    }

    fn resource_names(&self) -> Vec<&str> {
        vec![Anime::resource_name(), Producer::resource_name(), "heroes"]
    }

    fn register_resources(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(
            CrudDescriptor::<AnimeMapper>::new(self.animes.clone()).with_policies(
                self.config.policies_for(Anime::resource_name()),
                self.api_key.clone(),
            ),
        ));
        registry.register(Box::new(
            CrudDescriptor::<ProducerMapper>::new(self.producers.clone()).with_policies(
                self.config.policies_for(Producer::resource_name()),
                self.api_key.clone(),
            ),
        ));
    }

    fn custom_routes(&self) -> Option<Router> {
        Some(self.filter_routes().merge(hero::routes()))
    }
}

#[derive(Debug, Deserialize)]
struct AnimeFilter {
    name: Option<String>,
}

/// GET /animes/filter?name=
///
/// First anime whose name matches ignoring case.
async fn filter_anime(
    State(service): State<CrudService<Anime>>,
    Query(filter): Query<AnimeFilter>,
) -> Result<Json<AnimeGetResponse>, ServiceError> {
    let name = filter.name.ok_or_else(|| ValidationError::MissingParameter {
        parameter: "name".to_string(),
    })?;
    info!(name = %name, "filtering anime by name");

    service
        .list(Some(&name))
        .await?
        .iter()
        .find(|anime| anime.matches_name(&name))
        .map(|anime| Json(AnimeMapper::to_get_response(anime)))
        .ok_or_else(|| {
            ServiceError::Entity(EntityError::NotFoundByName {
                entity_type: Anime::display_name().to_string(),
                name,
            })
        })
}
