//! Typed error handling for the equipments plugin
//!
//! Every fallible operation in the crate returns [`EquipmentsResult`]. The
//! error is split into categories so the HTTP layer can map each one to a
//! status code and a stable machine-readable code.
//!
//! # Error Categories
//!
//! - [`ExtensionError`]: record-level failures (missing or duplicate names)
//! - [`ValidationError`]: bad input (selectors, spec fields)
//! - [`StorageError`]: store backend failures, passed through unmodified
//! - [`ConfigError`]: configuration and seed loading failures
//!
//! # Example
//!
//! ```rust,ignore
//! match group_service.delete_equipment_group("g1").await {
//!     Ok(group) => println!("deleted {}", group.metadata.name),
//!     Err(EquipmentsError::Extension(ExtensionError::NotFound { name, .. })) => {
//!         println!("no group named {}", name);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the plugin
#[derive(Debug, Error)]
pub enum EquipmentsError {
    /// Record-level errors (fetch, create, delete)
    #[error(transparent)]
    Extension(#[from] ExtensionError),

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Theme template rendering failed
    #[error("Failed to render template '{template}': {message}")]
    Render { template: String, message: String },
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl EquipmentsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EquipmentsError::Extension(e) => e.status_code(),
            EquipmentsError::Validation(_) => StatusCode::BAD_REQUEST,
            EquipmentsError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EquipmentsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EquipmentsError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            EquipmentsError::Extension(e) => e.error_code(),
            EquipmentsError::Validation(e) => e.error_code(),
            EquipmentsError::Storage(_) => "STORAGE_ERROR",
            EquipmentsError::Config(_) => "CONFIG_ERROR",
            EquipmentsError::Render { .. } => "RENDER_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            EquipmentsError::Extension(ExtensionError::NotFound { kind, name })
            | EquipmentsError::Extension(ExtensionError::AlreadyExists { kind, name }) => {
                Some(serde_json::json!({ "kind": kind, "name": name }))
            }
            EquipmentsError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for EquipmentsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Extension Errors
// =============================================================================

/// Errors related to stored records
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// No record with this name
    #[error("{kind} with name '{name}' not found")]
    NotFound { kind: String, name: String },

    /// A record with this name already exists
    #[error("{kind} with name '{name}' already exists")]
    AlreadyExists { kind: String, name: String },
}

impl ExtensionError {
    pub fn not_found(kind: &str, name: &str) -> Self {
        ExtensionError::NotFound {
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ExtensionError::NotFound { .. } => StatusCode::NOT_FOUND,
            ExtensionError::AlreadyExists { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ExtensionError::NotFound { .. } => "EXTENSION_NOT_FOUND",
            ExtensionError::AlreadyExists { .. } => "EXTENSION_ALREADY_EXISTS",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// A label or field selector requirement could not be parsed
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } | ValidationError::FieldErrors(_) => {
                "VALIDATION_ERROR"
            }
            ValidationError::InvalidSelector { .. } => "INVALID_SELECTOR",
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldValidationError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldValidationError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for EquipmentsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        EquipmentsError::Validation(errors.into())
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Query execution error
    #[error("{backend} query error: {message}")]
    QueryError { backend: String, message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl From<serde_yaml::Error> for EquipmentsError {
    fn from(err: serde_yaml::Error) -> Self {
        EquipmentsError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for plugin operations
pub type EquipmentsResult<T> = Result<T, EquipmentsError>;
