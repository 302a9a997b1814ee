//! A2A message types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::de;

/// Part type handled by the bridge
pub const TEXT_PART: &str = "text";

/// A message in the A2A protocol
///
/// Inbound messages come from the user; the bridge answers with agent messages
/// carrying a single text part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    #[serde(default, deserialize_with = "de::raw_role_or_default")]
    pub role: Role,

    /// Message content parts (at least one required)
    #[serde(default, deserialize_with = "de::or_default")]
    pub parts: Vec<Part>,
}

impl Message {
    /// Create a new message with text content
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::text(text)],
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Add a message part
    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }
}

/// Role of a message sender
///
/// Roles outside the A2A vocabulary are kept verbatim so validation can report
/// them instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Message from a user
    User,

    /// Message from an AI agent
    Agent,

    /// Any other role string
    Other(String),
}

impl Role {
    /// Wire representation of the role
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
            Role::Other(role) => role,
        }
    }
}

/// A missing or `null` role deserializes to an empty `Other`
impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "user" => Role::User,
            "agent" => Role::Agent,
            _ => Role::Other(role),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A part of a message: `{"type": "text", "text": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    /// Part type discriminator
    #[serde(rename = "type", default, deserialize_with = "de::or_default")]
    pub kind: String,

    /// Text content, present for text parts
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::or_default"
    )]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: TEXT_PART.to_string(),
            text: Some(text.into()),
        }
    }

    /// Check if this is a text part
    pub fn is_text(&self) -> bool {
        self.kind == TEXT_PART
    }
}
