//! High-level bridge handle

use std::sync::Arc;

use bytes::Bytes;
use tower::ServiceExt;
use tower_service::Service;

use crate::{
    bridge::config::BridgeConfig,
    codec::Codec,
    protocol::{error::BridgeError, TaskRequest, TaskStatusResponse},
    service::{BridgeRequest, RequestContext},
};

/// Entry point for answering A2A tasks through a completion provider
///
/// Wraps a Tower service and the codec used at the A2A boundary. The inbound
/// listener owns transport concerns; it hands task bodies to
/// [`Bridge::handle_json`] or typed tasks to [`Bridge::handle`].
pub struct Bridge<S> {
    service: S,
    codec: Arc<dyn Codec>,
    config: BridgeConfig,
}

impl<S> Bridge<S>
where
    S: Service<BridgeRequest, Response = TaskStatusResponse, Error = BridgeError>,
{
    /// Create a new bridge
    pub fn new(service: S, codec: Arc<dyn Codec>, config: BridgeConfig) -> Self {
        Self {
            service,
            codec,
            config,
        }
    }

    /// Get the bridge configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Answer a task
    ///
    /// # Errors
    ///
    /// Returns an error if the task is invalid, the provider call fails or the
    /// provider's answer cannot be translated
    pub async fn handle(&mut self, task: TaskRequest) -> Result<TaskStatusResponse, BridgeError> {
        self.handle_with_context(task, RequestContext::default()).await
    }

    /// Answer a task with additional request context (headers, credentials)
    pub async fn handle_with_context(
        &mut self,
        task: TaskRequest,
        context: RequestContext,
    ) -> Result<TaskStatusResponse, BridgeError> {
        let request = BridgeRequest::new(task, context);
        ServiceExt::<BridgeRequest>::ready(&mut self.service)
            .await?
            .call(request)
            .await
    }

    /// Answer a JSON-encoded task with a JSON-encoded task-status response
    pub async fn handle_json(&mut self, body: &[u8]) -> Result<Bytes, BridgeError> {
        let task = self.codec.decode_task_request(body)?;
        let response = self.handle(task).await?;
        self.codec.encode_task_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::{bridge::BridgeBuilder, translate::FixedClock, transport::mock::MockTransport};

    use super::*;

    fn config() -> BridgeConfig {
        BridgeConfig::new("https://example.com".parse().unwrap())
    }

    #[tokio::test]
    async fn test_handle_json() {
        let transport = MockTransport::json(json!({
            "choices": [{"message": {"role": "assistant", "content": "answer"}}]
        }));
        let mut bridge = BridgeBuilder::new(config())
            .with_transport(transport)
            .with_clock(Arc::new(FixedClock::new("2025-09-17T14:40:00Z")))
            .build()
            .unwrap();

        let body = json!({
            "id": "task-1",
            "sessionId": "session-1",
            "message": {"role": "user", "parts": [{"type": "text", "text": "question"}]}
        });
        let out = bridge
            .handle_json(&serde_json::to_vec(&body).unwrap())
            .await
            .unwrap();
        let out: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(out["id"], "task-1");
        assert_eq!(out["sessionId"], "session-1");
        assert_eq!(out["status"]["state"], "completed");
        assert_eq!(out["status"]["message"]["parts"][0]["text"], "answer");
    }

    #[test]
    fn test_handle_json_rejects_invalid_body() {
        let transport = MockTransport::json(json!({}));
        let mut bridge = BridgeBuilder::new(config())
            .with_transport(transport.clone())
            .build()
            .unwrap();

        let result = tokio_test::block_on(bridge.handle_json(b"{not json"));

        assert!(matches!(result, Err(BridgeError::Serialization(_))));
        assert!(transport.requests().is_empty());
    }
}
