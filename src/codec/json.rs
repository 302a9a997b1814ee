//! JSON codec for both boundaries

use bytes::Bytes;

use crate::{
    codec::Codec,
    completion::{CompletionRequest, CompletionResponse},
    protocol::{error::BridgeError, TaskRequest, TaskStatusResponse},
};

/// JSON codec
#[derive(Debug, Clone, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn decode_task_request(&self, body: &[u8]) -> Result<TaskRequest, BridgeError> {
        Ok(serde_json::from_slice(body)?)
    }

    fn encode_task_response(&self, response: &TaskStatusResponse) -> Result<Bytes, BridgeError> {
        Ok(Bytes::from(serde_json::to_vec(response)?))
    }

    fn encode_completion_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<Bytes, BridgeError> {
        Ok(Bytes::from(serde_json::to_vec(request)?))
    }

    fn decode_completion_response(&self, body: &[u8]) -> Result<CompletionResponse, BridgeError> {
        // An empty body carries no choices
        if body.is_empty() {
            return Ok(CompletionResponse::default());
        }

        Ok(serde_json::from_slice(body)?)
    }

    fn content_type(&self) -> &str {
        "application/json"
    }
}
