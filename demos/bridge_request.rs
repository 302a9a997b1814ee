//! Answers one A2A task through an Azure OpenAI deployment.
//!
//! ```text
//! AZURE_OPENAI_ENDPOINT=https://my-resource.openai.azure.com \
//! AZURE_OPENAI_DEPLOYMENT=gpt-4o \
//! AZURE_OPENAI_API_KEY=... \
//! cargo run --example bridge_request -- task.json
//! ```
//!
//! Without a file argument a sample credit-score question is sent.

use std::{env, time::Duration};

use anyhow::Context as _;
use tower_a2a_bridge::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

const SAMPLE_TASK: &str = r#"{
    "id": "test-task-123",
    "sessionId": "test-session-456",
    "message": {
        "role": "user",
        "parts": [{"type": "text", "text": "How can I improve my credit score from 700?"}]
    }
}"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let endpoint = env::var("AZURE_OPENAI_ENDPOINT").context("AZURE_OPENAI_ENDPOINT is not set")?;
    let deployment =
        env::var("AZURE_OPENAI_DEPLOYMENT").context("AZURE_OPENAI_DEPLOYMENT is not set")?;
    let api_key = env::var("AZURE_OPENAI_API_KEY").context("AZURE_OPENAI_API_KEY is not set")?;
    let api_version =
        env::var("AZURE_OPENAI_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

    let body = match env::args().nth(1) {
        Some(path) => std::fs::read(&path).with_context(|| format!("reading {path}"))?,
        None => SAMPLE_TASK.as_bytes().to_vec(),
    };

    let config = BridgeConfig::azure(endpoint.parse()?, &deployment, &api_version)
        .with_timeout(Duration::from_secs(60));

    let mut bridge = BridgeBuilder::new_http(config)?
        .with_auth(AuthCredentials::azure_api_key(api_key))
        .build()?;

    tracing::info!(%deployment, "sending task to completion provider");

    match bridge.handle_json(&body).await {
        Ok(response) => {
            println!("{}", String::from_utf8_lossy(&response));
            Ok(())
        }
        Err(err) => {
            let task_error = tower_a2a_bridge::protocol::TaskError::from(&err);
            eprintln!("{}", serde_json::to_string_pretty(&task_error)?);
            Err(err.into())
        }
    }
}
