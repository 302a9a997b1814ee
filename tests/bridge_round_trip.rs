//! End-to-end tests of the bridge over a canned transport

use std::{
    sync::{Arc, Mutex},
    task::{Context, Poll},
};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};
use tower_a2a_bridge::{
    prelude::*,
    translate::FixedClock,
    transport::{Transport, TransportRequest, TransportResponse},
};
use url::Url;

const RESPONSE_FIXTURE: &str = include_str!("fixtures/response.json");
const REQUEST_FIXTURE: &str = include_str!("fixtures/request.json");

/// Replies with a fixed status and body, remembering the last request
#[derive(Clone)]
struct CannedTransport {
    status: u16,
    body: Bytes,
    last: Arc<Mutex<Option<TransportRequest>>>,
}

impl CannedTransport {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body: Bytes::from_static(body.as_bytes()),
            last: Arc::new(Mutex::new(None)),
        }
    }

    fn last_request(&self) -> Option<TransportRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), BridgeError>> {
        Poll::Ready(Ok(()))
    }

    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, BridgeError> {
        *self.last.lock().unwrap() = Some(request);
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }
}

fn bridge(transport: CannedTransport) -> Bridge<tower_a2a_bridge::bridge::BoxBridgeService> {
    let base_url: Url = "https://example.openai.azure.com".parse().unwrap();
    let config = BridgeConfig::azure(base_url, "gpt-4o", "2024-02-15-preview");

    BridgeBuilder::new(config)
        .with_transport(transport)
        .with_auth(AuthCredentials::azure_api_key("test-key"))
        .with_clock(Arc::new(FixedClock::new("2025-09-17T14:40:00Z")))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_json_round_trip() {
    let transport = CannedTransport::new(200, RESPONSE_FIXTURE);
    let mut bridge = bridge(transport.clone());

    let out = bridge.handle_json(REQUEST_FIXTURE.as_bytes()).await.unwrap();
    let out: Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(out["id"], "test-task-123");
    assert_eq!(out["sessionId"], "test-session-456");
    assert_eq!(out["status"]["state"], "completed");
    assert_eq!(out["status"]["timestamp"], "2025-09-17T14:40:00Z");
    assert_eq!(out["status"]["message"]["role"], "agent");
    assert_eq!(out["status"]["message"]["parts"][0]["type"], "text");

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.path,
        "/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-15-preview"
    );
    assert_eq!(sent.headers["api-key"], "test-key");

    let body: Value = serde_json::from_slice(&sent.body).unwrap();
    assert_eq!(
        body,
        json!({
            "messages": [{"role": "user", "content": "How can I improve my credit score from 700?"}],
            "temperature": 0.2,
            "max_tokens": 300
        })
    );
}

#[tokio::test]
async fn test_provider_error_surfaces() {
    let transport = CannedTransport::new(
        400,
        r#"{"error": {"code": "context_length_exceeded", "message": "too long"}}"#,
    );
    let mut bridge = bridge(transport);

    let task = TaskRequest::new("t", "s", Message::user("hi"));
    let err = bridge.handle(task).await.unwrap_err();

    match err {
        BridgeError::Upstream { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "too long");
        }
        other => panic!("Expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_assistant_role_required() {
    let transport = CannedTransport::new(
        200,
        r#"{"choices": [{"message": {"role": "tool", "content": "x"}}]}"#,
    );
    let mut bridge = bridge(transport);

    let err = bridge
        .handle(TaskRequest::new("t", "s", Message::user("hi")))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BridgeError::Validation(ValidationError::UnexpectedRole { .. })
    ));
}

#[tokio::test]
async fn test_unsupported_part_is_rejected_before_sending() {
    let transport = CannedTransport::new(200, RESPONSE_FIXTURE);
    let mut bridge = bridge(transport.clone());

    let body = json!({
        "id": "t",
        "sessionId": "s",
        "message": {"role": "user", "parts": [{"type": "file", "file": {"name": "a.pdf"}}]}
    });
    let err = bridge
        .handle_json(&serde_json::to_vec(&body).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BridgeError::Validation(ValidationError::UnsupportedPartType { .. })
    ));
    assert!(transport.last_request().is_none());
}

#[tokio::test]
async fn test_null_identifier_is_a_validation_error() {
    let transport = CannedTransport::new(200, RESPONSE_FIXTURE);
    let mut bridge = bridge(transport.clone());

    let body = json!({
        "id": null,
        "sessionId": "s",
        "message": {"role": "user", "parts": [{"type": "text", "text": "hi"}]}
    });
    let err = bridge
        .handle_json(&serde_json::to_vec(&body).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.code(), "MALFORMED_REQUEST");
    assert!(transport.last_request().is_none());
}

#[tokio::test]
async fn test_oddly_typed_provider_metadata_is_tolerated() {
    let transport = CannedTransport::new(
        200,
        r#"{"id": 42, "created": 1726584000.5, "usage": {"prompt_tokens": null},
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]}"#,
    );
    let mut bridge = bridge(transport);

    let status = bridge
        .handle(TaskRequest::new("t", "s", Message::user("hi")))
        .await
        .unwrap();

    assert_eq!(status.text(), Some("ok"));
}
