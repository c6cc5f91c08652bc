//! In-memory implementation of Repository for development and tests

use crate::core::error::StorageError;
use crate::core::repository::{Predicate, Repository};
use crate::core::Entity;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// In-memory repository keyed by id
///
/// Records keep insertion order. Clones share the same store, so a
/// repository handed to a service and one kept by a test see the same data.
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    records: Arc<RwLock<IndexMap<i64, T>>>,
    sequence: Arc<AtomicI64>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Create a repository preloaded with `seed`
    ///
    /// The id sequence starts after the highest seeded id.
    pub fn with_seed(seed: Vec<T>) -> Self {
        let max_id = seed.iter().map(Entity::id).max().unwrap_or(0);
        let records = seed.into_iter().map(|e| (e.id(), e)).collect();

        Self {
            records: Arc::new(RwLock::new(records)),
            sequence: Arc::new(AtomicI64::new(max_id)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, IndexMap<i64, T>>, StorageError> {
        self.records.read().map_err(|_| StorageError::LockPoisoned {
            store: T::resource_name().to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, IndexMap<i64, T>>, StorageError> {
        self.records.write().map_err(|_| StorageError::LockPoisoned {
            store: T::resource_name().to_string(),
        })
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StorageError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<T>, StorageError> {
        Ok(self
            .read()?
            .values()
            .filter(|e| e.matches_name(name))
            .cloned()
            .collect())
    }

    async fn find_by(&self, predicate: Predicate<'_, T>) -> Result<Vec<T>, StorageError> {
        Ok(self
            .read()?
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect())
    }

    async fn save(&self, entity: T) -> Result<T, StorageError> {
        let mut records = self.write()?;
        self.sequence.fetch_max(entity.id(), Ordering::SeqCst);
        records.insert(entity.id(), entity.clone());

        debug!(store = T::resource_name(), id = entity.id(), "record saved");
        Ok(entity)
    }

    async fn delete(&self, entity: &T) -> Result<(), StorageError> {
        let removed = self.write()?.shift_remove(&entity.id()).is_some();

        debug!(store = T::resource_name(), id = entity.id(), removed, "record deleted");
        Ok(())
    }

    async fn update(&self, entity: T) -> Result<(), StorageError> {
        let mut records = self.write()?;
        let id = entity.id();

        if records.shift_remove(&id).is_some() {
            records.insert(id, entity);
            debug!(store = T::resource_name(), id, "record replaced");
        } else {
            debug!(store = T::resource_name(), id, "update skipped, record absent");
        }
        Ok(())
    }

    async fn next_id(&self) -> Result<i64, StorageError> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
