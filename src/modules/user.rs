//! User module

use crate::config::ServiceConfig;
use crate::core::Entity;
use crate::core::module::Module;
use crate::core::repository::Repository;
use crate::core::service::CrudService;
use crate::entities::user::{UniqueEmail, User, UserMapper};
use crate::server::entity_registry::{CrudDescriptor, EntityRegistry};
use crate::storage::InMemoryRepository;
use std::sync::Arc;

pub struct UserModule {
    users: CrudService<User>,
    config: ServiceConfig,
}

impl UserModule {
    /// Build the module over an in-memory store, seeded when `config.seed` is set
    pub fn new(config: &ServiceConfig) -> Self {
        let users = if config.seed {
            InMemoryRepository::with_seed(User::samples())
        } else {
            InMemoryRepository::new()
        };
        Self::with_repository(config, Arc::new(users))
    }

    pub fn with_repository(config: &ServiceConfig, users: Arc<dyn Repository<User>>) -> Self {
        Self {
            users: CrudService::new(users).with_rule(UniqueEmail),
            config: config.clone(),
        }
    }
}

impl Module for UserModule {
    fn name(&self) -> &str {
        "user-service"
    }

    fn resource_names(&self) -> Vec<&str> {
        vec![User::resource_name()]
    }

    fn register_resources(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(
            CrudDescriptor::<UserMapper>::new(self.users.clone())
                .with_policies(
                    self.config.policies_for(User::resource_name()),
                    Arc::new(self.config.api_key()),
                )
                .with_filter_param("firstName"),
        ));
    }
}
