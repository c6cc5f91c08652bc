//! Configuration loading and management
//!
//! The service reads an optional YAML file (path in `CATALOG_CONFIG`) and
//! then applies `CATALOG_HOST`, `CATALOG_PORT` and `CATALOG_API_KEY`
//! overrides. Every field has a default, so an empty file is valid.
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//! seed: true
//! api_key:
//!   header: x-api-key
//!   value: "123"
//! resources:
//!   producers:
//!     create: api_key
//! ```

use crate::core::auth::{AccessPolicies, AccessPolicy, ApiKey, Operation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const CONFIG_PATH_VAR: &str = "CATALOG_CONFIG";
pub const HOST_VAR: &str = "CATALOG_HOST";
pub const PORT_VAR: &str = "CATALOG_PORT";
pub const API_KEY_VAR: &str = "CATALOG_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid port '{value}'")]
    InvalidPort { value: String },

    #[error("unknown access policy '{value}' for {resource}.{operation}")]
    InvalidPolicy {
        resource: String,
        operation: String,
        value: String,
    },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty disables the CORS layer
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
        }
    }
}

/// API key checked by `api_key` policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyConfig {
    pub header: String,
    pub value: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        let key = ApiKey::default();
        Self {
            header: key.header,
            value: key.value,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,

    /// Load the sample records at startup
    pub seed: bool,

    pub api_key: ApiKeyConfig,

    /// Per-resource operation policies (`resources.<plural>.<operation>`)
    ///
    /// A YAML `resources` map replaces the defaults as a whole.
    pub resources: HashMap<String, HashMap<String, String>>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let producers = HashMap::from([(
            Operation::Create.as_str().to_string(),
            "api_key".to_string(),
        )]);

        Self {
            server: ServerConfig::default(),
            seed: true,
            api_key: ApiKeyConfig::default(),
            resources: HashMap::from([("producers".to_string(), producers)]),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject policy names that do not parse
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (resource, operations) in &self.resources {
            for (operation, value) in operations {
                if AccessPolicy::parse(value).is_none() {
                    return Err(ConfigError::InvalidPolicy {
                        resource: resource.clone(),
                        operation: operation.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Load from `CATALOG_CONFIG` (if set) and apply environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply host, port and API key overrides from `lookup`
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup(HOST_VAR) {
            self.server.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value: port })?;
        }
        if let Some(key) = lookup(API_KEY_VAR) {
            self.api_key.value = key;
        }
        Ok(())
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn api_key(&self) -> ApiKey {
        ApiKey {
            header: self.api_key.header.to_lowercase(),
            value: self.api_key.value.clone(),
        }
    }

    /// Access policies configured for the resource `plural`
    pub fn policies_for(&self, plural: &str) -> AccessPolicies {
        let Some(operations) = self.resources.get(plural) else {
            return AccessPolicies::public();
        };

        operations
            .iter()
            .fold(AccessPolicies::public(), |policies, (name, policy)| {
                match Operation::parse(name) {
                    Some(op) => policies.with(op, AccessPolicy::parse_policy(policy)),
                    None => {
                        warn!(resource = plural, operation = %name, "ignoring unknown operation");
                        policies
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.seed);
        assert_eq!(config.api_key(), ApiKey::default());
        assert_eq!(
            config.policies_for("producers").policy(Operation::Create),
            AccessPolicy::ApiKey
        );
        assert_eq!(
            config.policies_for("animes").policy(Operation::Create),
            AccessPolicy::Public
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ServiceConfig::from_yaml_str("").unwrap(),
            ServiceConfig::default()
        );
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = ServiceConfig::from_yaml_str("server:\n  port: 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.resources.contains_key("producers"));
    }

    #[test]
    fn test_resources_from_yaml() {
        let yaml = r#"
resources:
  users:
    delete: api_key
    bogus: api_key
"#;
        let config = ServiceConfig::from_yaml_str(yaml).unwrap();
        let users = config.policies_for("users");
        assert_eq!(users.policy(Operation::Delete), AccessPolicy::ApiKey);
        assert_eq!(users.policy(Operation::List), AccessPolicy::Public);
        assert_eq!(
            config.policies_for("producers").policy(Operation::Create),
            AccessPolicy::Public
        );
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let yaml = "resources:\n  producers:\n    create: api key\n";
        let err = ServiceConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPolicy { ref resource, ref value, .. }
                if resource == "producers" && value == "api key"
        ));
    }

    #[test]
    fn test_unparsed_policy_stays_restrictive() {
        let mut config = ServiceConfig::default();
        config.resources.insert(
            "producers".to_string(),
            HashMap::from([("create".to_string(), "api key".to_string())]),
        );
        assert_eq!(
            config.policies_for("producers").policy(Operation::Create),
            AccessPolicy::ApiKey
        );
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: false\napi_key:\n  value: secret").unwrap();

        let config = ServiceConfig::from_yaml_file(file.path()).unwrap();
        assert!(!config.seed);
        assert_eq!(config.api_key().value, "secret");
        assert_eq!(config.api_key().header, "x-api-key");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ServiceConfig::from_yaml_file("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = ServiceConfig::from_yaml_str("server: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides() {
        let mut config = ServiceConfig::default();
        let env = HashMap::from([
            (HOST_VAR, "0.0.0.0".to_string()),
            (PORT_VAR, "3000".to_string()),
            (API_KEY_VAR, "abc".to_string()),
        ]);
        config
            .apply_overrides(|name| env.get(name).cloned())
            .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.api_key().value, "abc");
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = ServiceConfig::default();
        let err = config
            .apply_overrides(|name| (name == PORT_VAR).then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
