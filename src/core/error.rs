//! Typed error handling for the customer service
//!
//! Every layer returns [`CustomerError`]. The kind is decided where the failure is
//! detected and travels upward unchanged, apart from the single collapse performed
//! by the service on list failures.
//!
//! # Error Categories
//!
//! - Validation: [`CustomerError::MissingParameter`], [`CustomerError::InvalidParameter`],
//!   [`CustomerError::BodyFormat`]
//! - Storage: [`CustomerError::EntityNotFound`], [`CustomerError::PersistenceFailure`],
//!   [`CustomerError::Cancelled`]
//! - Everything else: [`CustomerError::OperationFailed`], [`CustomerError::Unauthorized`]
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_by_id(7).await {
//!     Ok(customer) => println!("Found: {:?}", customer),
//!     Err(CustomerError::EntityNotFound { id, .. }) => println!("No customer {}", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The error type shared by the handler, service and storage layers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// A required path parameter was empty
    #[error("Missing required parameter: {}", .params.join(", "))]
    MissingParameter { params: Vec<String> },

    /// A parameter (or the request body) could not be interpreted
    #[error("Incorrect value for parameter: {}", .params.join(", "))]
    InvalidParameter { params: Vec<String> },

    /// No row exists for the requested identifier
    #[error("No '{entity}' found for id '{id}'")]
    EntityNotFound { entity: String, id: i64 },

    /// Any storage failure other than "not found"
    #[error("DB Error: {message}")]
    PersistenceFailure { message: String },

    /// A merge-patch body could not be applied or decoded
    #[error("Invalid request body: {message}")]
    BodyFormat { message: String },

    /// Generic failure (unreadable body, row scan error)
    #[error("{message}")]
    OperationFailed { message: String },

    /// The storage call did not finish before its deadline
    #[error("{operation} was cancelled: deadline exceeded")]
    Cancelled { operation: String },

    /// Rejected by the authentication middleware
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },
}

impl CustomerError {
    pub fn missing_param(param: &str) -> Self {
        CustomerError::MissingParameter {
            params: vec![param.to_string()],
        }
    }

    pub fn invalid_param(param: &str) -> Self {
        CustomerError::InvalidParameter {
            params: vec![param.to_string()],
        }
    }

    pub fn not_found(id: i64) -> Self {
        CustomerError::EntityNotFound {
            entity: "customer".to_string(),
            id,
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        CustomerError::PersistenceFailure {
            message: message.into(),
        }
    }

    pub fn body_format(message: impl Into<String>) -> Self {
        CustomerError::BodyFormat {
            message: message.into(),
        }
    }

    pub fn operation_failed(message: impl Into<String>) -> Self {
        CustomerError::OperationFailed {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CustomerError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            CustomerError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            CustomerError::BodyFormat { .. } => StatusCode::BAD_REQUEST,
            CustomerError::EntityNotFound { .. } => StatusCode::NOT_FOUND,
            CustomerError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            CustomerError::Cancelled { .. } => StatusCode::GATEWAY_TIMEOUT,
            CustomerError::PersistenceFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CustomerError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CustomerError::MissingParameter { .. } => "MISSING_PARAMETER",
            CustomerError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CustomerError::EntityNotFound { .. } => "ENTITY_NOT_FOUND",
            CustomerError::PersistenceFailure { .. } => "PERSISTENCE_FAILURE",
            CustomerError::BodyFormat { .. } => "BODY_FORMAT_ERROR",
            CustomerError::OperationFailed { .. } => "OPERATION_FAILED",
            CustomerError::Cancelled { .. } => "CANCELLED",
            CustomerError::Unauthorized { .. } => "UNAUTHORIZED",
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
            CustomerError::MissingParameter { params }
            | CustomerError::InvalidParameter { params } => {
                Some(serde_json::json!({ "params": params }))
            }
            CustomerError::EntityNotFound { entity, id } => Some(serde_json::json!({
                "entity": entity,
                "id": id
            })),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

#[cfg(feature = "mysql")]
impl From<sqlx::Error> for CustomerError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Callers that know the id re-tag this with `not_found(id)`
            sqlx::Error::RowNotFound => CustomerError::EntityNotFound {
                entity: "customer".to_string(),
                id: 0,
            },
            other => CustomerError::persistence(other.to_string()),
        }
    }
}

/// A specialized Result type for customer operations
pub type CustomerResult<T> = Result<T, CustomerError>;
