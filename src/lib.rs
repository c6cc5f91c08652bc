//! # Catalog Service
//!
//! CRUD REST endpoints for animes, producers and users over in-memory stores.
//!
//! ## Architecture
//!
//! Every resource follows the same pipeline, implemented once and
//! instantiated per resource:
//!
//! - **Repository**: ordered in-memory store with an id sequence
//! - **Service**: existence checks, uniqueness rules, `createdAt` preservation
//! - **Mapper**: request/response shapes to and from the record
//! - **Handlers**: HTTP verbs bound to service calls with validation and
//!   access policies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let config = ServiceConfig::default();
//! let app = ServerBuilder::new("catalog-service")
//!     .register_module(AnimeModule::new(&config))
//!     .register_module(UserModule::new(&config))
//!     .build()?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod modules;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        Entity, Mapper, Module, Repository, UniquenessRule,
        auth::{AccessPolicies, AccessPolicy, ApiKey, Operation},
        error::{EntityError, ErrorResponse, ServiceError, ValidationError},
        service::CrudService,
        validation::Validated,
    };

    // === Macros ===
    pub use crate::impl_catalog_entity;

    // === Resources ===
    pub use crate::entities::{Anime, Producer, User};
    pub use crate::modules::{AnimeModule, UserModule};

    // === Storage ===
    pub use crate::storage::InMemoryRepository;

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::{CrudDescriptor, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
