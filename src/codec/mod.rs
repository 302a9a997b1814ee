//! Serialization codecs for the two protocol boundaries

pub mod json;

pub use json::JsonCodec;

use bytes::Bytes;

use crate::{
    completion::{CompletionRequest, CompletionResponse},
    protocol::{error::BridgeError, TaskRequest, TaskStatusResponse},
};

/// Codec trait for the bytes crossing the bridge
///
/// One side speaks A2A (inbound task requests, outbound task-status
/// responses), the other speaks the completion API.
pub trait Codec: Send + Sync {
    /// Deserialize an inbound A2A task request body
    fn decode_task_request(&self, body: &[u8]) -> Result<TaskRequest, BridgeError>;

    /// Serialize a task-status response for the A2A caller
    fn encode_task_response(&self, response: &TaskStatusResponse) -> Result<Bytes, BridgeError>;

    /// Serialize a completion request for transport
    fn encode_completion_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<Bytes, BridgeError>;

    /// Deserialize a completion response body
    fn decode_completion_response(&self, body: &[u8]) -> Result<CompletionResponse, BridgeError>;

    /// Get the content type for this codec
    fn content_type(&self) -> &str;
}
