//! Transport abstraction for reaching the completion provider
//!
//! A transport carries exactly one kind of call: a `POST` of an encoded
//! completion request to a path on the provider, answered by a status code and
//! a body. Everything protocol-specific stays in the bridge service.

pub mod http;
#[cfg(test)]
pub(crate) mod mock;

use std::{
    collections::HashMap,
    task::{Context, Poll},
};

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;

use crate::protocol::error::BridgeError;

/// An encoded completion request to post to the provider
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Path on the provider, including any query string
    pub path: String,

    /// Headers sent with the call
    pub headers: HashMap<String, String>,

    /// Encoded completion request
    pub body: Bytes,
}

impl TransportRequest {
    /// Post `body` to `path`
    pub fn post(path: impl Into<String>, body: Bytes) -> Self {
        Self {
            path: path.into(),
            headers: HashMap::new(),
            body,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// The provider's raw answer
#[derive(Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the provider answered with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries completion calls to the provider
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    /// Backs `poll_ready` of the bridge service
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BridgeError>>;

    /// Post a completion request and wait for the provider's answer
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, BridgeError>;
}
