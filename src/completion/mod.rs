//! Chat-completion wire types (Azure OpenAI style)

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::protocol::de;

/// Sampling temperature sent with every completion request
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Completion length limit sent with every completion request
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Fixed sampling parameters attached to outbound requests
///
/// These are operator policy, never derived from the inbound A2A request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionPolicy {
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Role of a chat message author
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    /// Any other role string
    Other(String),
}

impl ChatRole {
    /// Wire representation of the role
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::Other(role) => role,
        }
    }
}

impl From<String> for ChatRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "system" => ChatRole::System,
            "user" => ChatRole::User,
            "assistant" => ChatRole::Assistant,
            _ => ChatRole::Other(role),
        }
    }
}

impl From<ChatRole> for String {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in an outbound completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Outbound chat-completion request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Inbound chat-completion response body
///
/// `id`, `object`, `created`, `model` and `usage` are provider metadata. They
/// are kept verbatim, whatever their JSON type, and play no part in translation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompletionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,

    /// Candidate completions; `null` or a non-array reads as empty
    #[serde(default, deserialize_with = "de::or_default")]
    pub choices: Vec<Choice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Value>,
}

/// One candidate completion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Choice {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::or_default"
    )]
    pub index: Option<u32>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::or_default"
    )]
    pub message: Option<ResponseMessage>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::or_default"
    )]
    pub finish_reason: Option<String>,
}

/// Message inside a completion choice
///
/// `role` and `content` are read loosely so that a wrong role or a non-string
/// payload is classified by the response translator rather than failing the
/// decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResponseMessage {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::raw_role"
    )]
    pub role: Option<ChatRole>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl ResponseMessage {
    /// Create an assistant message with text content
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Some(ChatRole::Assistant),
            content: Some(Value::String(content.into())),
        }
    }
}
