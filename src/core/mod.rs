//! Core traits and types shared by every resource

pub mod auth;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod module;
pub mod repository;
pub mod service;
pub mod validation;

pub use auth::{AccessPolicies, AccessPolicy, ApiKey, Operation, PolicyGuard};
pub use entity::Entity;
pub use error::{EntityError, ErrorResponse, ServiceError, StorageError, ValidationError};
pub use mapper::Mapper;
pub use module::Module;
pub use repository::Repository;
pub use service::{CrudService, UniquenessRule};
