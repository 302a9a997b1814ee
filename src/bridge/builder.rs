//! Builder assembling the bridge service stack

use std::sync::Arc;

use tower::util::BoxCloneService;
use tower_layer::Layer;

use crate::{
    bridge::{Bridge, BridgeConfig},
    codec::{Codec, JsonCodec},
    layer::{AuthCredentials, AuthLayer, ValidationLayer},
    protocol::{error::BridgeError, TaskStatusResponse},
    service::{BridgeRequest, BridgeService},
    transport::{HttpTransport, Transport},
    translate::{RequestTranslator, ResponseTranslator, TimestampProvider},
};

/// Type-erased service stack produced by [`BridgeBuilder`]
pub type BoxBridgeService = BoxCloneService<BridgeRequest, TaskStatusResponse, BridgeError>;

/// Builder for constructing bridges
///
/// # Example
///
/// ```rust,no_run
/// use tower_a2a_bridge::prelude::*;
///
/// # async fn example() -> Result<(), BridgeError> {
/// let config = BridgeConfig::azure(
///     "https://my-resource.openai.azure.com".parse().unwrap(),
///     "gpt-4o",
///     "2024-02-15-preview",
/// );
/// let mut bridge = BridgeBuilder::new_http(config)?
///     .with_auth(AuthCredentials::azure_api_key("key"))
///     .build()?;
///
/// let task = TaskRequest::new("task-1", "session-1", Message::user("Hello"));
/// let response = bridge.handle(task).await?;
/// println!("{:?}", response.text());
/// # Ok(())
/// # }
/// ```
pub struct BridgeBuilder<T: Transport> {
    config: BridgeConfig,
    transport: Option<T>,
    codec: Option<Arc<dyn Codec>>,
    auth: Option<AuthCredentials>,
    clock: Option<Arc<dyn TimestampProvider>>,
}

impl<T: Transport> BridgeBuilder<T> {
    /// Create a builder; a transport must be supplied with `with_transport`
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            transport: None,
            codec: None,
            auth: None,
            clock: None,
        }
    }

    /// Use a custom transport
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom codec
    pub fn with_codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Set credentials for the completion provider
    pub fn with_auth(mut self, credentials: AuthCredentials) -> Self {
        self.auth = Some(credentials);
        self
    }

    /// Set the timestamp source for task-status responses
    pub fn with_clock(mut self, clock: Arc<dyn TimestampProvider>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the bridge
    ///
    /// The stack is, from the outside in: validation (if enabled),
    /// authentication (if credentials were given), the core bridge service.
    ///
    /// # Errors
    ///
    /// Returns an error if no transport has been configured
    pub fn build(self) -> Result<Bridge<BoxBridgeService>, BridgeError> {
        let transport = self.transport.ok_or_else(|| {
            BridgeError::Config("Transport not configured. Call with_transport()".into())
        })?;
        let codec = self.codec.unwrap_or_else(|| Arc::new(JsonCodec));

        let responses = match self.clock {
            Some(clock) => ResponseTranslator::with_clock(clock),
            None => ResponseTranslator::new(),
        };

        let core = BridgeService::new(transport, codec.clone(), &self.config.completion_path)
            .with_request_translator(RequestTranslator::with_policy(self.config.policy))
            .with_response_translator(responses);

        let mut service = BoxCloneService::new(core);
        if let Some(credentials) = self.auth {
            service = BoxCloneService::new(AuthLayer::new(credentials).layer(service));
        }
        if self.config.validate {
            service = BoxCloneService::new(ValidationLayer::new().layer(service));
        }

        Ok(Bridge::new(service, codec, self.config))
    }
}

impl BridgeBuilder<HttpTransport> {
    /// Create a builder calling the configured provider over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new_http(config: BridgeConfig) -> Result<Self, BridgeError> {
        let transport = HttpTransport::with_timeout(config.completion_url.clone(), config.timeout)?;
        Ok(Self::new(config).with_transport(transport))
    }
}
