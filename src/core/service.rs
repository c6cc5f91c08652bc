//! Generic CRUD service sitting between handlers and repositories
//!
//! One [`CrudService`] per resource enforces existence checks, uniqueness
//! rules and field preservation on update. Per-resource behaviour is plugged
//! in through [`UniquenessRule`] implementations.

use crate::core::Entity;
use crate::core::error::{EntityError, ServiceError};
use crate::core::repository::Repository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A uniqueness constraint checked before a record is written
#[async_trait]
pub trait UniquenessRule<E: Entity>: Send + Sync {
    /// Reject `candidate` with a conflict if another record already holds
    /// its unique value. `exclude_id` names the record being replaced.
    async fn check(
        &self,
        repository: &dyn Repository<E>,
        candidate: &E,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError>;
}

/// Business-rule layer for one resource
pub struct CrudService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
    rules: Vec<Arc<dyn UniquenessRule<E>>>,
    /// Held across rule checks and the write they guard
    writes: Arc<Mutex<()>>,
}

impl<E: Entity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            rules: self.rules.clone(),
            writes: self.writes.clone(),
        }
    }
}

impl<E: Entity> CrudService<E> {
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self {
            repository,
            rules: Vec::new(),
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Add a uniqueness rule run on save and update
    pub fn with_rule(mut self, rule: impl UniquenessRule<E> + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// List records, optionally filtered by name
    ///
    /// A blank or absent filter returns every record.
    pub async fn list(&self, name: Option<&str>) -> Result<Vec<E>, ServiceError> {
        match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => Ok(self.repository.find_by_name(name).await?),
            None => Ok(self.repository.find_all().await?),
        }
    }

    pub async fn find_by_id_or_not_found(&self, id: i64) -> Result<E, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found::<E>(id))
    }

    pub async fn save(&self, entity: E) -> Result<E, ServiceError> {
        let _write = self.writes.lock().await;
        self.check_rules(&entity, None).await?;
        Ok(self.repository.save(entity).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let _write = self.writes.lock().await;
        let existing = self.find_by_id_or_not_found(id).await?;
        Ok(self.repository.delete(&existing).await?)
    }

    /// Replace a record, keeping its original creation timestamp
    pub async fn update(&self, entity: E) -> Result<(), ServiceError> {
        let _write = self.writes.lock().await;
        let existing = self.find_by_id_or_not_found(entity.id()).await?;
        let entity = entity.with_created_at(existing.created_at());

        self.check_rules(&entity, Some(existing.id())).await?;
        Ok(self.repository.update(entity).await?)
    }

    pub async fn next_id(&self) -> Result<i64, ServiceError> {
        Ok(self.repository.next_id().await?)
    }

    async fn check_rules(&self, entity: &E, exclude_id: Option<i64>) -> Result<(), ServiceError> {
        for rule in &self.rules {
            rule.check(self.repository.as_ref(), entity, exclude_id).await?;
        }
        Ok(())
    }
}

/// Conflict raised when a unique field is already taken
pub fn conflict<E: Entity>(field: &str, message: String) -> ServiceError {
    ServiceError::Entity(EntityError::Conflict {
        entity_type: E::display_name().to_string(),
        field: field.to_string(),
        message,
    })
}
