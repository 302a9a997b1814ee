//! Core bridge service implementation

use std::{
    sync::Arc,
    task::{Context, Poll},
};

use futures::future::BoxFuture;
use tower_service::Service;

use crate::{
    codec::Codec,
    completion::CompletionRequest,
    protocol::{error::BridgeError, TaskStatusResponse},
    service::{BridgeRequest, RequestContext},
    transport::{Transport, TransportRequest, TransportResponse},
    translate::{RequestTranslator, ResponseTranslator},
};

/// Bridge service answering A2A tasks through a completion provider
///
/// Each call translates the task, posts the completion request over the
/// transport and translates the provider's answer back, echoing the task's
/// `id` and `sessionId`.
pub struct BridgeService<T> {
    transport: T,
    codec: Arc<dyn Codec>,
    endpoint: String,
    requests: RequestTranslator,
    responses: ResponseTranslator,
}

impl<T> BridgeService<T>
where
    T: Transport,
{
    /// Create a new bridge service
    ///
    /// # Arguments
    ///
    /// * `transport` - The transport reaching the completion provider
    /// * `codec` - The codec for serialization/deserialization
    /// * `endpoint` - Path of the chat-completions endpoint on the transport
    pub fn new(transport: T, codec: Arc<dyn Codec>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            codec,
            endpoint: endpoint.into(),
            requests: RequestTranslator::default(),
            responses: ResponseTranslator::default(),
        }
    }

    /// Replace the request translator
    pub fn with_request_translator(mut self, requests: RequestTranslator) -> Self {
        self.requests = requests;
        self
    }

    /// Replace the response translator
    pub fn with_response_translator(mut self, responses: ResponseTranslator) -> Self {
        self.responses = responses;
        self
    }

    /// Build a transport request from a translated completion request
    fn build_transport_request(
        endpoint: &str,
        completion: &CompletionRequest,
        context: &RequestContext,
        codec: &dyn Codec,
    ) -> Result<TransportRequest, BridgeError> {
        let body = codec.encode_completion_request(completion)?;
        let mut transport_req = TransportRequest::post(endpoint, body)
            .header("Content-Type", codec.content_type())
            .header("Accept", codec.content_type());

        if let Some(auth) = &context.auth {
            let (header, value) = auth.to_header();
            transport_req = transport_req.header(header, value);
        }

        for (key, value) in &context.metadata {
            transport_req = transport_req.header(key.clone(), value.clone());
        }

        Ok(transport_req)
    }

    /// Map a non-success provider response to an error
    fn handle_error_response(transport_resp: &TransportResponse) -> BridgeError {
        let message = serde_json::from_slice::<serde_json::Value>(&transport_resp.body)
            .ok()
            .and_then(|json| {
                json.pointer("/error/message")
                    .or_else(|| json.get("message"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            });

        match (transport_resp.status, message) {
            (401 | 403, message) => {
                BridgeError::Auth(message.unwrap_or_else(|| "Access denied".into()))
            }
            (429, _) => BridgeError::RateLimitExceeded,
            (status, Some(message)) => BridgeError::Upstream { status, message },
            (status, None) => BridgeError::Upstream {
                status,
                message: format!("HTTP error: {}", status),
            },
        }
    }
}

impl<T> Service<BridgeRequest> for BridgeService<T>
where
    T: Transport,
{
    type Response = TaskStatusResponse;
    type Error = BridgeError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.transport.poll_ready(cx)
    }

    fn call(&mut self, req: BridgeRequest) -> Self::Future {
        let transport = self.transport.clone();
        let codec = self.codec.clone();
        let endpoint = self.endpoint.clone();
        let requests = self.requests;
        let responses = self.responses.clone();

        Box::pin(async move {
            let correlation = req.task.correlation();
            let completion = requests.translate(&req.task)?;

            tracing::debug!(
                task_id = %correlation.id,
                session_id = %correlation.session_id,
                "translated task request"
            );

            let transport_req =
                Self::build_transport_request(&endpoint, &completion, &req.context, codec.as_ref())?;
            let transport_resp = transport.send(transport_req).await?;

            if !transport_resp.is_success() {
                let err = Self::handle_error_response(&transport_resp);
                tracing::warn!(
                    task_id = %correlation.id,
                    status = transport_resp.status,
                    error = %err,
                    "completion provider rejected request"
                );
                return Err(err);
            }

            let completion_resp = codec.decode_completion_response(&transport_resp.body)?;
            let response = responses.translate(&completion_resp, &correlation)?;

            tracing::debug!(task_id = %correlation.id, "task completed");

            Ok(response)
        })
    }
}

impl<T> Clone for BridgeService<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            codec: self.codec.clone(),
            endpoint: self.endpoint.clone(),
            requests: self.requests,
            responses: self.responses.clone(),
        }
    }
}
