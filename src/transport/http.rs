//! HTTP transport over reqwest

use std::{
    task::{Context, Poll},
    time::Duration,
};

use async_trait::async_trait;
use url::Url;

use crate::protocol::error::BridgeError;

use super::{Transport, TransportRequest, TransportResponse};

/// Posts completion requests to a provider over HTTP(S)
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for the provider at `base_url`
    /// (e.g. `https://my-resource.openai.azure.com`)
    pub fn new(base_url: Url) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a transport whose calls time out after `timeout`
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, BridgeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a transport over a preconfigured reqwest client
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { client, base_url }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), BridgeError>> {
        // reqwest pools connections internally
        Poll::Ready(Ok(()))
    }

    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, BridgeError> {
        let url = self.url_for(&request.path);

        let mut call = self.client.post(&url).body(request.body);
        for (key, value) in request.headers {
            call = call.header(key, value);
        }

        let response = call.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!(%url, status, bytes = body.len(), "completion provider responded");

        Ok(TransportResponse::new(status, body))
    }
}
