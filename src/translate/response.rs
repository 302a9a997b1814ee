//! Completion response → A2A task-status response

use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::{
    completion::{ChatRole, CompletionResponse},
    protocol::{CorrelationContext, TaskStatusResponse, ValidationError},
};

use super::clock::{SystemClock, TimestampProvider};

/// Translates completion responses into completed A2A task-status responses
///
/// `finish_reason` is not consulted: any valid assistant message yields
/// `completed`, including truncated (`length`) or filtered answers.
#[derive(Clone)]
pub struct ResponseTranslator {
    clock: Arc<dyn TimestampProvider>,
}

impl ResponseTranslator {
    /// Create a translator stamping responses with wall-clock time
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a translator with an injected timestamp source
    pub fn with_clock(clock: Arc<dyn TimestampProvider>) -> Self {
        Self { clock }
    }

    /// Translate a completion response for the task identified by `correlation`
    ///
    /// Identifiers in the output come from `correlation` only; any `id` inside
    /// the completion response is ignored.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MalformedResponse`] when `choices` is empty or the
    ///   first choice has no message
    /// - [`ValidationError::UnexpectedRole`] when the message role is not `assistant`
    /// - [`ValidationError::MissingContent`] when `content` is absent or not a string
    pub fn translate(
        &self,
        response: &CompletionResponse,
        correlation: &CorrelationContext,
    ) -> Result<TaskStatusResponse, ValidationError> {
        super::translate_response(response, correlation, self.clock.as_ref())
    }
}

impl Default for ResponseTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResponseTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseTranslator").finish_non_exhaustive()
    }
}

pub(super) fn assistant_content(response: &CompletionResponse) -> Result<&str, ValidationError> {
    let choice = response.choices.first().ok_or_else(|| {
        ValidationError::malformed_response("choices", "must contain at least one choice")
    })?;

    let message = choice.message.as_ref().ok_or_else(|| {
        ValidationError::malformed_response("choices[0].message", "is required")
    })?;

    match &message.role {
        Some(ChatRole::Assistant) => {}
        other => {
            return Err(ValidationError::UnexpectedRole {
                field: "choices[0].message.role".into(),
                found: other
                    .as_ref()
                    .map(|role| role.to_string())
                    .unwrap_or_default(),
            })
        }
    }

    match &message.content {
        Some(Value::String(content)) => Ok(content),
        Some(_) => Err(ValidationError::missing_content(
            "choices[0].message.content",
            "must be a string",
        )),
        None => Err(ValidationError::missing_content(
            "choices[0].message.content",
            "is required",
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        completion::{Choice, ResponseMessage},
        protocol::{Role, TaskState},
        translate::clock::{FixedClock, MockTimestampProvider},
    };

    use super::*;

    const STAMP: &str = "2025-09-17T14:40:00Z";

    fn translator() -> ResponseTranslator {
        ResponseTranslator::with_clock(Arc::new(FixedClock::new(STAMP)))
    }

    fn correlation() -> CorrelationContext {
        CorrelationContext::new("task-1", "session-1")
    }

    fn response(message: ResponseMessage) -> CompletionResponse {
        CompletionResponse {
            choices: vec![Choice {
                index: Some(0),
                message: Some(message),
                finish_reason: Some("stop".into()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_translate_assistant_message() {
        let out = translator()
            .translate(&response(ResponseMessage::assistant("answer")), &correlation())
            .unwrap();

        assert_eq!(out.id, "task-1");
        assert_eq!(out.session_id, "session-1");
        assert_eq!(out.status.state, TaskState::Completed);
        assert_eq!(out.status.timestamp, STAMP);
        assert_eq!(out.status.message.role, Role::Agent);
        assert_eq!(out.status.message.parts.len(), 1);
        assert_eq!(out.text(), Some("answer"));
    }

    #[test]
    fn test_upstream_id_is_ignored() {
        let mut upstream = response(ResponseMessage::assistant("answer"));
        upstream.id = Some("chatcmpl-999".into());

        let out = translator().translate(&upstream, &correlation()).unwrap();
        assert_eq!(out.id, "task-1");
    }

    #[test]
    fn test_finish_reason_does_not_change_state() {
        let mut upstream = response(ResponseMessage::assistant("cut"));
        upstream.choices[0].finish_reason = Some("length".into());

        let out = translator().translate(&upstream, &correlation()).unwrap();
        assert_eq!(out.status.state, TaskState::Completed);
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let mut upstream = response(ResponseMessage::assistant("first"));
        upstream.choices.push(Choice {
            message: Some(ResponseMessage::assistant("second")),
            ..Default::default()
        });

        let out = translator().translate(&upstream, &correlation()).unwrap();
        assert_eq!(out.text(), Some("first"));
    }

    #[test]
    fn test_empty_choices() {
        let err = translator()
            .translate(&CompletionResponse::default(), &correlation())
            .unwrap_err();

        assert!(matches!(err, ValidationError::MalformedResponse { .. }));
        assert_eq!(err.field(), "choices");
    }

    #[test]
    fn test_choice_without_message() {
        let upstream = CompletionResponse {
            choices: vec![Choice::default()],
            ..Default::default()
        };
        let err = translator().translate(&upstream, &correlation()).unwrap_err();
        assert_eq!(err.field(), "choices[0].message");
    }

    #[test]
    fn test_unexpected_role() {
        let message = ResponseMessage {
            role: Some(ChatRole::User),
            content: Some(json!("echo")),
        };
        let err = translator()
            .translate(&response(message), &correlation())
            .unwrap_err();

        assert_eq!(
            err,
            ValidationError::UnexpectedRole {
                field: "choices[0].message.role".into(),
                found: "user".into(),
            }
        );
    }

    #[test]
    fn test_missing_role() {
        let message = ResponseMessage {
            role: None,
            content: Some(json!("text")),
        };
        let err = translator()
            .translate(&response(message), &correlation())
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedRole { .. }));
    }

    #[test]
    fn test_missing_or_non_string_content() {
        for content in [None, Some(json!(42)), Some(json!(["a"]))] {
            let message = ResponseMessage {
                role: Some(ChatRole::Assistant),
                content,
            };
            let err = translator()
                .translate(&response(message), &correlation())
                .unwrap_err();

            assert!(matches!(err, ValidationError::MissingContent { .. }));
            assert_eq!(err.field(), "choices[0].message.content");
        }
    }

    #[test]
    fn test_clock_consulted_once_per_translation() {
        let mut clock = MockTimestampProvider::new();
        clock
            .expect_timestamp()
            .times(1)
            .returning(|| "2030-01-01T00:00:00Z".to_string());

        let out = ResponseTranslator::with_clock(Arc::new(clock))
            .translate(&response(ResponseMessage::assistant("x")), &correlation())
            .unwrap();
        assert_eq!(out.status.timestamp, "2030-01-01T00:00:00Z");
    }

    #[test]
    fn test_clock_not_consulted_on_failure() {
        let mut clock = MockTimestampProvider::new();
        clock.expect_timestamp().never();

        let result = ResponseTranslator::with_clock(Arc::new(clock))
            .translate(&CompletionResponse::default(), &correlation());
        assert!(result.is_err());
    }
}
