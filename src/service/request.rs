//! Bridge service request types

use std::collections::HashMap;

use crate::{layer::auth::AuthCredentials, protocol::TaskRequest};

/// A request to the bridge service
///
/// This wraps an inbound A2A task with the context needed to call the
/// completion provider.
#[derive(Debug, Clone)]
pub struct BridgeRequest {
    /// The A2A task to answer
    pub task: TaskRequest,

    /// Request context (auth, extra headers)
    pub context: RequestContext,
}

impl BridgeRequest {
    /// Create a new bridge request
    pub fn new(task: TaskRequest, context: RequestContext) -> Self {
        Self { task, context }
    }
}

impl From<TaskRequest> for BridgeRequest {
    fn from(task: TaskRequest) -> Self {
        Self::new(task, RequestContext::default())
    }
}

/// Per-request context for the outbound completion call
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Credentials for the completion provider (set by `AuthLayer`)
    pub auth: Option<AuthCredentials>,

    /// Additional headers sent to the completion provider
    pub metadata: HashMap<String, String>,
}

impl RequestContext {
    /// Create an empty request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set authentication credentials
    pub fn with_auth(mut self, auth: AuthCredentials) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Add a metadata header
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
