//! Entity registry for managing resource descriptors and generating CRUD routes

use super::handlers::{self, CrudState};
use crate::core::Entity;
use crate::core::auth::{AccessPolicies, ApiKey, Operation, PolicyGuard, enforce_policy};
use crate::core::mapper::Mapper;
use crate::core::service::CrudService;
use axum::Router;
use axum::middleware;
use axum::routing::{MethodRouter, delete, get, post, put};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Trait that describes how to build routes for a resource
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "anime")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "animes")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this resource
    ///
    /// Paths are relative to the API prefix:
    /// - GET/POST/PUT /{plural}
    /// - GET/DELETE /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all resources in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register a descriptor, replacing any previous one for the same type
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, d| router.merge(d.build_routes()))
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}

/// Descriptor serving the five CRUD operations of one resource
pub struct CrudDescriptor<M: Mapper> {
    service: CrudService<M::Entity>,
    policies: AccessPolicies,
    api_key: Arc<ApiKey>,
    filter_param: &'static str,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: Mapper> CrudDescriptor<M> {
    pub fn new(service: CrudService<M::Entity>) -> Self {
        Self {
            service,
            policies: AccessPolicies::public(),
            api_key: Arc::new(ApiKey::default()),
            filter_param: "name",
            _mapper: PhantomData,
        }
    }

    pub fn with_policies(mut self, policies: AccessPolicies, api_key: Arc<ApiKey>) -> Self {
        self.policies = policies;
        self.api_key = api_key;
        self
    }

    /// Query parameter carrying the list filter (defaults to `name`)
    pub fn with_filter_param(mut self, param: &'static str) -> Self {
        self.filter_param = param;
        self
    }

    fn guarded(
        &self,
        operation: Operation,
        route: MethodRouter<CrudState<M>>,
    ) -> MethodRouter<CrudState<M>> {
        let guard = PolicyGuard::new(self.policies.policy(operation), self.api_key.clone());
        route.route_layer(middleware::from_fn_with_state(guard, enforce_policy))
    }
}

impl<M: Mapper> EntityDescriptor for CrudDescriptor<M> {
    fn entity_type(&self) -> &str {
        M::Entity::resource_name_singular()
    }

    fn plural(&self) -> &str {
        M::Entity::resource_name()
    }

    fn build_routes(&self) -> Router {
        let state = CrudState::<M> {
            service: self.service.clone(),
            filter_param: self.filter_param,
        };
        let collection = format!("/{}", self.plural());
        let item = format!("/{}/{{id}}", self.plural());

        Router::new()
            .route(
                &collection,
                self.guarded(Operation::List, get(handlers::list::<M>))
                    .merge(self.guarded(Operation::Create, post(handlers::create::<M>)))
                    .merge(self.guarded(Operation::Update, put(handlers::update::<M>))),
            )
            .route(
                &item,
                self.guarded(Operation::Read, get(handlers::read::<M>))
                    .merge(self.guarded(Operation::Delete, delete(handlers::delete::<M>))),
            )
            .with_state(state)
    }
}
