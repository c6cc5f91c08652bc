//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for every resource declared in modules
//! - Custom module routes (filters, static lists)
//! - Health check routes

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod handlers;

pub use builder::ServerBuilder;
pub use entity_registry::{CrudDescriptor, EntityDescriptor, EntityRegistry};
pub use exposure::API_PREFIX;
