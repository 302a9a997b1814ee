//! Schema translation between A2A tasks and chat completions
//!
//! Both translators are pure and synchronous: they hold no mutable state, do no
//! I/O and are safe to share across threads. Request and response translation
//! are independent; the caller carries the [`CorrelationContext`] from one to
//! the other.

pub mod clock;
pub mod request;
pub mod response;

pub use clock::{FixedClock, SystemClock, TimestampProvider};
pub use request::{validate_task_request, RequestTranslator};
pub use response::ResponseTranslator;

use crate::{
    completion::{CompletionRequest, CompletionResponse},
    protocol::{CorrelationContext, Message, TaskRequest, TaskStatusResponse, ValidationError},
};

/// Translate a task request using the default completion policy
pub fn translate_request(request: &TaskRequest) -> Result<CompletionRequest, ValidationError> {
    RequestTranslator::new().translate(request)
}

/// Translate a completion response, stamping it with `clock`
pub fn translate_response(
    response: &CompletionResponse,
    correlation: &CorrelationContext,
    clock: &dyn TimestampProvider,
) -> Result<TaskStatusResponse, ValidationError> {
    let content = response::assistant_content(response)?;

    Ok(TaskStatusResponse::completed(
        correlation.clone(),
        Message::agent(content),
        clock.timestamp(),
    ))
}
