//! # Tower A2A Bridge
//!
//! A Tower-based bridge answering Agent2Agent (A2A) tasks with a chat-completion
//! provider such as Azure OpenAI.
//!
//! At its core are two pure translators:
//!
//! - [`translate::RequestTranslator`] turns an A2A task request into a
//!   chat-completion request
//! - [`translate::ResponseTranslator`] turns a chat-completion response into a
//!   completed A2A task-status response
//!
//! Around them sit the pieces needed to run the round trip: codecs, an HTTP
//! transport, auth and validation layers, and a [`bridge::Bridge`] handle.
//!
//! ## Example
//!
//! ```rust
//! use tower_a2a_bridge::prelude::*;
//! use tower_a2a_bridge::translate::{translate_request, translate_response, FixedClock};
//!
//! let task = TaskRequest::new("task-1", "session-1", Message::user("Hello"));
//! let completion = translate_request(&task).unwrap();
//! assert_eq!(completion.messages[0].content, "Hello");
//!
//! let answer: CompletionResponse = serde_json::from_str(
//!     r#"{"choices":[{"message":{"role":"assistant","content":"Hi!"}}]}"#,
//! )
//! .unwrap();
//! let clock = FixedClock::new("2025-09-17T14:40:00Z");
//! let status = translate_response(&answer, &task.correlation(), &clock).unwrap();
//! assert_eq!(status.text(), Some("Hi!"));
//! ```

pub mod bridge;
pub mod codec;
pub mod completion;
pub mod layer;
pub mod protocol;
pub mod service;
pub mod translate;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        bridge::{Bridge, BridgeBuilder, BridgeConfig},
        completion::{CompletionPolicy, CompletionRequest, CompletionResponse},
        layer::AuthCredentials,
        protocol::{
            BridgeError, CorrelationContext, Message, Part, Role, TaskRequest, TaskState,
            TaskStatusResponse, ValidationError,
        },
        translate::{RequestTranslator, ResponseTranslator, TimestampProvider},
    };
}
