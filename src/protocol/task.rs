//! A2A task request and task-status types

use serde::{Deserialize, Serialize};

use super::{de, message::Message};

/// An inbound A2A task request
///
/// Fields that are absent, `null` or of the wrong type read as empty so that
/// validation can name them rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRequest {
    /// Caller-assigned task identifier
    #[serde(default, deserialize_with = "de::or_default")]
    pub id: String,

    /// Caller-assigned session identifier
    #[serde(rename = "sessionId", default, deserialize_with = "de::or_default")]
    pub session_id: String,

    /// The user message to answer
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::or_default"
    )]
    pub message: Option<Message>,
}

impl TaskRequest {
    /// Create a new task request
    pub fn new(id: impl Into<String>, session_id: impl Into<String>, message: Message) -> Self {
        Self {
            id: id.into(),
            session_id: session_id.into(),
            message: Some(message),
        }
    }

    /// The `{id, sessionId}` pair the caller carries to the response step
    pub fn correlation(&self) -> CorrelationContext {
        CorrelationContext::new(self.id.clone(), self.session_id.clone())
    }
}

/// Identifiers threaded by the caller between request and response translation
///
/// Completion responses carry no reference back to the A2A task, so the caller
/// keeps this alongside the outbound call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CorrelationContext {
    /// Task identifier to echo
    pub id: String,

    /// Session identifier to echo
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

impl CorrelationContext {
    /// Create a new correlation context
    pub fn new(id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            session_id: session_id.into(),
        }
    }
}

/// Task state reported back to the A2A caller
///
/// A translated answer always completes the task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task completed successfully
    Completed,
}

/// Status block of a task-status response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// Current state of the task
    pub state: TaskState,

    /// ISO-8601 time the status was produced
    pub timestamp: String,

    /// Agent message carrying the answer
    pub message: Message,
}

/// Outbound A2A task-status response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatusResponse {
    /// Echo of the request's task identifier
    pub id: String,

    /// Echo of the request's session identifier
    #[serde(rename = "sessionId")]
    pub session_id: String,

    /// Status of the task
    pub status: TaskStatus,
}

impl TaskStatusResponse {
    /// Build a completed response for the given correlation context
    pub fn completed(
        correlation: CorrelationContext,
        message: Message,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: correlation.id,
            session_id: correlation.session_id,
            status: TaskStatus {
                state: TaskState::Completed,
                timestamp: timestamp.into(),
                message,
            },
        }
    }

    /// Text of the first part of the status message, if any
    pub fn text(&self) -> Option<&str> {
        self.status
            .message
            .parts
            .first()
            .and_then(|part| part.text.as_deref())
    }
}
