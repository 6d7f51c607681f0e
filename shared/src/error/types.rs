//! Application error and API response types

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Application error carrying a code, a message and optional details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message (may override the code's default message)
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create an error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
            details: None,
        }
    }

    /// Create an error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code)
    }

    // ==================== Convenience constructors ====================

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn invalid_pin() -> Self {
        Self::new(ErrorCode::InvalidPin)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::with_message(ErrorCode::InvalidFormat, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::with_message(ErrorCode::InternalError, err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::with_message(ErrorCode::ValidationFailed, err.to_string())
    }
}

/// Result alias used throughout the workspace
pub type AppResult<T> = Result<T, AppError>;

/// Uniform API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (absent on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Message describing the result
    pub message: String,
    /// Payload (absent on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Build a success response
    pub fn success(data: T) -> Self {
        Self {
            code: None,
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Build an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if self.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "system error");
        }
        let status = self.code.http_status();
        let body = axum::Json(ApiResponse::<()>::error(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::CartEmpty);
        assert_eq!(err.message, "Cart is empty");
        assert_eq!(err.category(), ErrorCategory::Checkout);
    }

    #[test]
    fn test_with_detail() {
        let err = AppError::new(ErrorCode::InsufficientStock)
            .with_detail("product_id", "p-1")
            .with_detail("available", 2);
        let details = err.details.unwrap();
        assert_eq!(details["product_id"], "p-1");
        assert_eq!(details["available"], 2);
    }

    #[test]
    fn test_error_response_shape() {
        let err = AppError::invalid_pin();
        let resp = ApiResponse::<()>::error(&err);
        assert_eq!(resp.code, Some(1002));
        assert!(resp.data.is_none());
    }
}
