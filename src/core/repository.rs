//! Repository trait for entity persistence
//!
//! The service layer only talks to this trait, so the in-memory store can be
//! swapped for a real backend without touching handlers or business rules.

use crate::core::Entity;
use crate::core::error::StorageError;
use async_trait::async_trait;

/// Predicate used by [`Repository::find_by`]
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// CRUD access to a store of `T` records
///
/// Absence is never an error at this layer: lookups return `None` or an
/// empty list, and deleting or updating a missing record is a no-op. The
/// only failure is the backend itself becoming unusable.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All records in insertion order
    async fn find_all(&self) -> Result<Vec<T>, StorageError>;

    /// The record with the given id, if any
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StorageError>;

    /// Records whose filterable name matches `name` ignoring case
    ///
    /// An empty `name` yields an empty list.
    async fn find_by_name(&self, name: &str) -> Result<Vec<T>, StorageError>;

    /// Records satisfying an arbitrary predicate
    async fn find_by(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StorageError>;

    /// Append a record and return it
    async fn save(&self, entity: T) -> Result<T, StorageError>;

    /// Remove the record sharing `entity`'s id
    async fn delete(&self, entity: &T) -> Result<(), StorageError>;

    /// Replace the record sharing `entity`'s id
    async fn update(&self, entity: T) -> Result<(), StorageError>;

    /// Allocate an id not used by any record yet
    async fn next_id(&self) -> Result<i64, StorageError>;
}
