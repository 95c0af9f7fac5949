//! Error handling for the shelf access layer

use thiserror::Error;

/// Failures surfaced by the transport, the envelope decoder and the
/// fallback store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("unexpected payload: {message}")]
    Payload { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("validation error: {message}")]
    Validation { field: String, message: String },
}

impl ApiError {
    /// Create a transport (network) error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a non-success status error
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a payload shape error
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a not found error for a resource id
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::NotFound {
            message: format!("{} '{}' does not exist", resource, id),
        }
    }

    /// Create a validation error for a named input field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Payload { .. } => "payload_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation { .. } => "validation_error",
        }
    }

    /// Whether the access layer may substitute mock data for this failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::Transport { .. } | ApiError::Status { .. } | ApiError::Payload { .. }
        )
    }

    /// Message suitable for showing next to the form or list that failed.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound { message } => message.clone(),
            ApiError::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::status(status.as_u16());
        }
        ApiError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::payload(err.to_string())
    }
}
