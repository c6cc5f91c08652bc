//! Access policies for resource operations
//!
//! Each resource operation carries an [`AccessPolicy`]:
//! - `public`: no check
//! - `api_key`: a fixed header must carry the configured key
//!
//! Policies are enforced by [`enforce_policy`], a middleware layered on the
//! individual method routes so the check runs before the body is read.

use crate::core::error::{RequestError, ServiceError};
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashMap;
use std::sync::Arc;

/// Access policy for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Public access (no check)
    #[default]
    Public,

    /// Caller must present the shared API key
    ApiKey,
}

impl AccessPolicy {
    /// Parse a known policy name; `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "public" => Some(AccessPolicy::Public),
            "api_key" | "api-key" | "apikey" => Some(AccessPolicy::ApiKey),
            _ => None,
        }
    }

    /// Parse policy from string (for YAML config)
    ///
    /// Unknown names fall back to the restrictive `ApiKey`.
    pub fn parse_policy(s: &str) -> Self {
        Self::parse(s).unwrap_or(AccessPolicy::ApiKey)
    }
}

/// The five operations every resource exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Read,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    /// Key used for this operation in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Operation::ALL.into_iter().find(|op| op.as_str() == s)
    }
}

/// Per-operation policies of one resource; unset operations are public
#[derive(Debug, Clone, Default)]
pub struct AccessPolicies {
    policies: HashMap<Operation, AccessPolicy>,
}

impl AccessPolicies {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn with(mut self, operation: Operation, policy: AccessPolicy) -> Self {
        self.policies.insert(operation, policy);
        self
    }

    pub fn policy(&self, operation: Operation) -> AccessPolicy {
        self.policies.get(&operation).copied().unwrap_or_default()
    }
}

/// Header name and expected value of the shared API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub header: String,
    pub value: String,
}

impl Default for ApiKey {
    fn default() -> Self {
        Self {
            header: "x-api-key".to_string(),
            value: "123".to_string(),
        }
    }
}

/// A policy bound to the key it checks against
#[derive(Debug, Clone)]
pub struct PolicyGuard {
    pub policy: AccessPolicy,
    pub api_key: Arc<ApiKey>,
}

impl PolicyGuard {
    pub fn new(policy: AccessPolicy, api_key: Arc<ApiKey>) -> Self {
        Self { policy, api_key }
    }

    pub fn check(&self, headers: &HeaderMap) -> Result<(), RequestError> {
        match self.policy {
            AccessPolicy::Public => Ok(()),
            AccessPolicy::ApiKey => {
                let presented = headers
                    .get(self.api_key.header.as_str())
                    .and_then(|v| v.to_str().ok());

                if presented == Some(self.api_key.value.as_str()) {
                    Ok(())
                } else {
                    Err(RequestError::MissingApiKey {
                        header: self.api_key.header.clone(),
                    })
                }
            }
        }
    }
}

/// Middleware rejecting requests that do not satisfy the route's policy
pub async fn enforce_policy(
    State(guard): State<PolicyGuard>,
    request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    guard.check(request.headers())?;
    Ok(next.run(request).await)
}
