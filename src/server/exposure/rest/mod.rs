//! REST API exposure
//!
//! Assembles the registered resource routes and module routes under
//! `/api/v1`, plus health checks at the root.

use crate::server::entity_registry::EntityRegistry;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Prefix shared by every resource route
pub const API_PREFIX: &str = "/api/v1";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Resource CRUD routes
    /// - Custom module routes
    pub fn build_router(
        registry: &EntityRegistry,
        custom_routes: Vec<Router>,
        service_name: &str,
    ) -> Router {
        let api = custom_routes
            .into_iter()
            .fold(registry.build_routes(), |api, routes| api.merge(routes));

        Self::health_routes(service_name).nest(API_PREFIX, api)
    }

    /// Build health check routes
    fn health_routes(service_name: &str) -> Router {
        let body = json!({
            "status": "ok",
            "service": service_name
        });
        let health = get(move || Self::health_check(body.clone()));

        Router::new()
            .route("/health", health.clone())
            .route("/healthz", health)
    }

    /// Health check endpoint handler
    async fn health_check(body: Value) -> Json<Value> {
        Json(body)
    }
}
