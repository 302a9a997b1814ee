//! Validation layer for bridge requests and responses

use std::task::{Context, Poll};

use futures::future::BoxFuture;
use tower_layer::Layer;
use tower_service::Service;

use crate::{
    protocol::{error::BridgeError, CorrelationContext, Role, TaskStatusResponse},
    service::BridgeRequest,
    translate::validate_task_request,
};

/// Layer that rejects invalid A2A tasks before they reach the provider and
/// checks that answers echo the task's identifiers
#[derive(Clone, Debug, Default)]
pub struct ValidationLayer;

impl ValidationLayer {
    /// Create a new validation layer
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ValidationLayer {
    type Service = ValidationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ValidationService { inner }
    }
}

/// Validation service that wraps an inner service
#[derive(Clone, Debug)]
pub struct ValidationService<S> {
    inner: S,
}

impl<S> ValidationService<S> {
    /// Validate an inbound bridge request
    fn validate_request(req: &BridgeRequest) -> Result<(), BridgeError> {
        validate_task_request(&req.task)?;
        Ok(())
    }

    /// Validate an outbound response against the request it answers
    fn validate_response(
        resp: &TaskStatusResponse,
        correlation: &CorrelationContext,
    ) -> Result<(), BridgeError> {
        if resp.id != correlation.id || resp.session_id != correlation.session_id {
            return Err(BridgeError::Other(format!(
                "Response for task `{}` does not match request task `{}`",
                resp.id, correlation.id
            )));
        }

        if resp.status.message.role != Role::Agent {
            return Err(BridgeError::Other(
                "Status message must be authored by the agent".into(),
            ));
        }

        if resp.status.message.parts.is_empty() {
            return Err(BridgeError::Other(
                "Status message must have at least one part".into(),
            ));
        }

        Ok(())
    }
}

impl<S> Service<BridgeRequest> for ValidationService<S>
where
    S: Service<BridgeRequest, Response = TaskStatusResponse, Error = BridgeError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = TaskStatusResponse;
    type Error = BridgeError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: BridgeRequest) -> Self::Future {
        if let Err(e) = Self::validate_request(&req) {
            tracing::debug!(error = %e, "rejected task request");
            return Box::pin(async move { Err(e) });
        }

        let correlation = req.task.correlation();
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let response = inner.call(req).await?;

            Self::validate_response(&response, &correlation)?;

            Ok(response)
        })
    }
}
