//! Bridge configuration

use std::time::Duration;

use url::Url;

use crate::completion::CompletionPolicy;

/// Default chat-completions path for OpenAI-compatible providers
pub const DEFAULT_COMPLETION_PATH: &str = "/chat/completions";

/// Configuration for a bridge
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the completion provider
    pub completion_url: Url,

    /// Path (and query) of the chat-completions endpoint
    pub completion_path: String,

    /// Timeout for a single completion call
    pub timeout: Duration,

    /// Sampling parameters attached to every completion request
    pub policy: CompletionPolicy,

    /// Validate tasks before calling the provider and answers afterwards
    pub validate: bool,
}

impl BridgeConfig {
    /// Create a new bridge configuration
    pub fn new(completion_url: Url) -> Self {
        Self {
            completion_url,
            completion_path: DEFAULT_COMPLETION_PATH.to_string(),
            timeout: Duration::from_secs(30),
            policy: CompletionPolicy::default(),
            validate: true,
        }
    }

    /// Create a configuration for an Azure OpenAI deployment
    ///
    /// # Arguments
    ///
    /// * `resource_url` - e.g. "<https://my-resource.openai.azure.com>"
    /// * `deployment` - Name of the model deployment
    /// * `api_version` - Value of the `api-version` query parameter
    pub fn azure(resource_url: Url, deployment: &str, api_version: &str) -> Self {
        Self::new(resource_url).with_completion_path(format!(
            "/openai/deployments/{deployment}/chat/completions?api-version={api_version}"
        ))
    }

    /// Set the chat-completions path
    pub fn with_completion_path(mut self, path: impl Into<String>) -> Self {
        self.completion_path = path.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the completion policy
    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable validation
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }
}
