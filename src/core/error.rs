//! Typed error handling for the catalog service
//!
//! Every failure a request can hit is one of the categories below. Handlers
//! return [`ServiceError`] and axum turns it into the public error body
//! `{"status": <int>, "message": <string>}`.
//!
//! # Error Categories
//!
//! - [`EntityError`]: Not-found and uniqueness conflicts on records
//! - [`ValidationError`]: Malformed bodies, blank fields, bad path ids
//! - [`RequestError`]: Access policy rejections (API key)
//! - [`StorageError`]: In-memory store failures
//!
//! # Example
//!
//! ```rust,ignore
//! match service.find_by_id_or_not_found(99).await {
//!     Ok(anime) => println!("Found: {:?}", anime),
//!     Err(ServiceError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("Anime {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The main error type for the catalog service
#[derive(Debug)]
pub enum ServiceError {
    /// Entity-related errors (lookups and uniqueness)
    Entity(EntityError),

    /// Validation errors
    Validation(ValidationError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Entity(e) => write!(f, "{}", e),
            ServiceError::Validation(e) => write!(f, "{}", e),
            ServiceError::Request(e) => write!(f, "{}", e),
            ServiceError::Storage(e) => write!(f, "{}", e),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Entity(e) => Some(e),
            ServiceError::Validation(e) => Some(e),
            ServiceError::Request(e) => Some(e),
            ServiceError::Storage(e) => Some(e),
            ServiceError::Internal(_) => None,
        }
    }
}

/// Error body returned by every endpoint on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Entity(e) => e.status_code(),
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Request(e) => e.status_code(),
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Entity(e) => e.error_code(),
            ServiceError::Validation(e) => e.error_code(),
            ServiceError::Request(e) => e.error_code(),
            ServiceError::Storage(_) => "STORAGE_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            message: self.to_string(),
        }
    }

    /// Shorthand for a not-found error on entity type `E`
    pub fn not_found<E: crate::core::Entity>(id: i64) -> Self {
        ServiceError::Entity(EntityError::NotFound {
            entity_type: E::display_name().to_string(),
            id,
        })
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::warn!(code = self.error_code(), error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups and uniqueness rules
#[derive(Debug)]
pub enum EntityError {
    /// Entity was not found
    NotFound { entity_type: String, id: i64 },

    /// No entity matched a name lookup
    NotFoundByName { entity_type: String, name: String },

    /// A unique field already holds the candidate's value
    Conflict {
        entity_type: String,
        field: String,
        message: String,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, .. }
            | EntityError::NotFoundByName { entity_type, .. } => {
                write!(f, "{} not found", entity_type)
            }
            EntityError::Conflict { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } | EntityError::NotFoundByName { .. } => {
                StatusCode::NOT_FOUND
            }
            EntityError::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } | EntityError::NotFoundByName { .. } => {
                "ENTITY_NOT_FOUND"
            }
            EntityError::Conflict { .. } => "ENTITY_CONFLICT",
        }
    }
}

impl From<EntityError> for ServiceError {
    fn from(err: EntityError) -> Self {
        ServiceError::Entity(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Field validation errors, ordered by field name
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON body
    InvalidJson { message: String },

    /// Path id is not a number
    InvalidId { value: String },

    /// Required query parameter is absent
    MissingParameter { parameter: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "{}", msgs.join("; "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
            ValidationError::InvalidId { value } => {
                write!(f, "Invalid id: '{}'", value)
            }
            ValidationError::MissingParameter { parameter } => {
                write!(f, "The parameter '{}' is required", parameter)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidId { .. } => "INVALID_ID",
            ValidationError::MissingParameter { .. } => "MISSING_PARAMETER",
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the backing store
#[derive(Debug)]
pub enum StorageError {
    /// A writer panicked while holding the store lock
    LockPoisoned { store: String },

    /// Backend-specific failure
    Backend { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { store } => {
                write!(f, "Store '{}' is unavailable: lock poisoned", store)
            }
            StorageError::Backend { message } => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Storage(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// API key header absent or not matching the configured key
    MissingApiKey { header: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingApiKey { header } => {
                write!(f, "Header '{}' is missing or invalid", header)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingApiKey { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MissingApiKey { .. } => "MISSING_API_KEY",
        }
    }
}

impl From<RequestError> for ServiceError {
    fn from(err: RequestError) -> Self {
        ServiceError::Request(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldValidationError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("The field '{}' is invalid", field)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Validation(errors.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_uses_resource_name() {
        let err = EntityError::NotFound {
            entity_type: "Anime".to_string(),
            id: 99,
        };
        assert_eq!(err.to_string(), "Anime not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_status_code() {
        let err = EntityError::Conflict {
            entity_type: "User".to_string(),
            field: "email".to_string(),
            message: "Email a@b.com already exists".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Email a@b.com already exists");
    }

    #[test]
    fn test_field_errors_join_messages() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "firstName".to_string(),
                message: "The field 'firstName' is required".to_string(),
            },
            FieldValidationError {
                field: "lastName".to_string(),
                message: "The field 'lastName' is required".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "The field 'firstName' is required; The field 'lastName' is required"
        );
    }

    #[test]
    fn test_error_response_carries_status() {
        let err = ServiceError::Entity(EntityError::NotFound {
            entity_type: "Producer".to_string(),
            id: 7,
        });
        let response = err.to_response();
        assert_eq!(response.status, 404);
        assert_eq!(response.message, "Producer not found");
    }

    #[test]
    fn test_request_error_is_bad_request() {
        let err: ServiceError = RequestError::MissingApiKey {
            header: "x-api-key".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "MISSING_API_KEY");
        assert_eq!(err.to_string(), "Header 'x-api-key' is missing or invalid");
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err: ServiceError = StorageError::LockPoisoned {
            store: "animes".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_validator_errors_sorts_by_field() {
        let mut errors = validator::ValidationErrors::new();
        errors.add(
            "name",
            validator::ValidationError::new("not_blank")
                .with_message("The field 'name' is required".into()),
        );
        errors.add("id", validator::ValidationError::new("required"));

        let ValidationError::FieldErrors(fields) = ValidationError::from(errors) else {
            panic!("expected field errors");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "id");
        assert_eq!(fields[0].message, "The field 'id' is invalid");
        assert_eq!(fields[1].message, "The field 'name' is required");
    }
}
