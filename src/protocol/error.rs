//! Error types for bridge operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified failure of a schema translation
///
/// Every variant names the offending field so a caller can turn it into a
/// protocol-level failure response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required A2A request field is missing, empty or invalid
    #[error("Malformed request: `{field}` {reason}")]
    MalformedRequest { field: String, reason: String },

    /// The first message part is not a text part
    #[error("Unsupported part type `{found}` in `{field}`, expected `text`")]
    UnsupportedPartType { field: String, found: String },

    /// The completion response has no usable choice
    #[error("Malformed response: `{field}` {reason}")]
    MalformedResponse { field: String, reason: String },

    /// The completion message was not authored by the assistant
    #[error("Unexpected role `{found}` in `{field}`, expected `assistant`")]
    UnexpectedRole { field: String, found: String },

    /// The completion message carries no string content
    #[error("Missing content: `{field}` {reason}")]
    MissingContent { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn malformed_request(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_content(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingContent {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::MalformedRequest { field, .. }
            | Self::UnsupportedPartType { field, .. }
            | Self::MalformedResponse { field, .. }
            | Self::UnexpectedRole { field, .. }
            | Self::MissingContent { field, .. } => field,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "MALFORMED_REQUEST",
            Self::UnsupportedPartType { .. } => "UNSUPPORTED_PART_TYPE",
            Self::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            Self::UnexpectedRole { .. } => "UNEXPECTED_ROLE",
            Self::MissingContent { .. } => "MISSING_CONTENT",
        }
    }
}

/// Main error type for bridge operations
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Schema translation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Transport-level error (network, connection, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The completion provider answered with a non-success status
    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Authentication or authorization error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout error
    #[error("Request timeout")]
    Timeout,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid bridge configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::Validation(err) => err.code(),
            BridgeError::Transport(_) => "TRANSPORT_ERROR",
            BridgeError::Upstream { .. } => "UPSTREAM_ERROR",
            BridgeError::Auth(_) => "AUTH_ERROR",
            BridgeError::RateLimitExceeded => "RATE_LIMITED",
            BridgeError::Timeout => "TIMEOUT",
            BridgeError::Serialization(_) => "INVALID_JSON",
            BridgeError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Structured error a listener can return to an A2A caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct TaskError {
    /// Error code (e.g., "MALFORMED_REQUEST", "UPSTREAM_ERROR")
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details as structured data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl TaskError {
    /// Create a new task error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the task error
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&BridgeError> for TaskError {
    fn from(err: &BridgeError) -> Self {
        let task_error = TaskError::new(err.code(), err.to_string());
        match err {
            BridgeError::Validation(v) => {
                task_error.with_details(serde_json::json!({ "field": v.field() }))
            }
            BridgeError::Upstream { status, .. } => {
                task_error.with_details(serde_json::json!({ "status": status }))
            }
            _ => task_error,
        }
    }
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BridgeError::Timeout
        } else if err.is_connect() {
            BridgeError::Transport(format!("Connection error: {}", err))
        } else {
            BridgeError::Transport(err.to_string())
        }
    }
}
