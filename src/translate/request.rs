//! A2A task request → completion request

use crate::{
    completion::{ChatMessage, CompletionPolicy, CompletionRequest},
    protocol::{Message, Role, TaskRequest, ValidationError},
};

/// Translates inbound A2A task requests into completion requests
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestTranslator {
    policy: CompletionPolicy,
}

impl RequestTranslator {
    /// Create a translator using the default completion policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with an explicit completion policy
    pub fn with_policy(policy: CompletionPolicy) -> Self {
        Self { policy }
    }

    /// Translate a task request into a single-message completion request
    ///
    /// Only the first part is consumed; its text is passed through untouched.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MalformedRequest`] when `id`, `sessionId`, `message`,
    ///   `message.role` or `message.parts` is missing or invalid
    /// - [`ValidationError::UnsupportedPartType`] when the first part is not text
    pub fn translate(&self, request: &TaskRequest) -> Result<CompletionRequest, ValidationError> {
        let text = validate_task_request(request)?;

        Ok(CompletionRequest {
            messages: vec![ChatMessage::user(text)],
            temperature: self.policy.temperature,
            max_tokens: self.policy.max_tokens,
        })
    }
}

/// Validate a task request and return the text of its first part
pub fn validate_task_request(request: &TaskRequest) -> Result<&str, ValidationError> {
    if request.id.is_empty() {
        return Err(ValidationError::malformed_request("id", "must be a non-empty string"));
    }
    if request.session_id.is_empty() {
        return Err(ValidationError::malformed_request(
            "sessionId",
            "must be a non-empty string",
        ));
    }

    let message = request
        .message
        .as_ref()
        .ok_or_else(|| ValidationError::malformed_request("message", "must be a message object"))?;

    first_text(message)
}

fn first_text(message: &Message) -> Result<&str, ValidationError> {
    if message.role != Role::User {
        return Err(ValidationError::malformed_request(
            "message.role",
            format!("must be `user`, got `{}`", message.role),
        ));
    }

    let part = message.parts.first().ok_or_else(|| {
        ValidationError::malformed_request("message.parts", "must contain at least one part")
    })?;

    if !part.is_text() {
        return Err(ValidationError::UnsupportedPartType {
            field: "message.parts[0].type".into(),
            found: part.kind.clone(),
        });
    }

    if message.parts.len() > 1 {
        tracing::debug!(
            ignored = message.parts.len() - 1,
            "only the first message part is translated"
        );
    }

    part.text.as_deref().ok_or_else(|| {
        ValidationError::malformed_request("message.parts[0].text", "must be a string")
    })
}
