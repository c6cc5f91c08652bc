//! Module system
//!
//! A module groups related resources and registers them with the server.

use crate::server::entity_registry::EntityRegistry;
use axum::Router;

/// Trait for a service module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Plural names of the resources served by this module
    fn resource_names(&self) -> Vec<&str>;

    /// Register resource descriptors with the entity registry
    fn register_resources(&self, registry: &mut EntityRegistry);

    /// Extra routes outside the CRUD pattern, relative to the API prefix
    fn custom_routes(&self) -> Option<Router> {
        None
    }
}
