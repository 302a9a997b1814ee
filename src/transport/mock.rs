use std::{
    fmt,
    sync::{Arc, Mutex},
    task::{Context, Poll},
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    protocol::error::BridgeError,
    transport::{Transport, TransportRequest, TransportResponse},
};

type Handler = Arc<dyn Fn(&TransportRequest) -> TransportResponse + Send + Sync>;

/// Answers every call with the handler's response and records what was sent
#[derive(Clone)]
pub(crate) struct MockTransport {
    handler: Handler,
    seen: Arc<Mutex<Vec<TransportRequest>>>,
}

impl MockTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&TransportRequest) -> TransportResponse + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer 200 OK with `body`
    pub fn json(body: serde_json::Value) -> Self {
        let body = Bytes::from(serde_json::to_vec(&body).unwrap());
        Self::new(move |_| TransportResponse::new(200, body.clone()))
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), BridgeError>> {
        Poll::Ready(Ok(()))
    }

    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, BridgeError> {
        let response = (self.handler)(&request);
        self.seen.lock().unwrap().push(request);
        Ok(response)
    }
}

impl fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTransport").finish_non_exhaustive()
    }
}
