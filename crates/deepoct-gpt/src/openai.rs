use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::client::{CompletionClient, CompletionRequest};
use crate::error::GptError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Chat-completions client for OpenAI and compatible servers.
pub struct OpenAiClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, GptError> {
        if config.api_key.trim().is_empty() {
            return Err(GptError::Config("API key is empty".to_string()));
        }
        let base = config.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(GptError::Config(format!(
                "base URL must be http(s): {}",
                config.base_url
            )));
        }

        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build();

        Ok(Self {
            agent: ureq::Agent::new_with_config(agent_config),
            endpoint: format!("{base}/v1/chat/completions"),
            api_key: config.api_key,
        })
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GptError> {
        info!(
            model = %request.model,
            max_tokens = request.max_tokens,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(request)
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => {
                    GptError::Invocation(format!("completion endpoint returned HTTP {code}"))
                }
                other => GptError::Invocation(other.to_string()),
            })?;

        let body: CompletionResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| GptError::ResponseParse(e.to_string()))?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GptError::ResponseParse("no message content in response".to_string()))?;

        let text = text.trim().to_string();
        debug!(response = %text, "chat completion response");
        Ok(text)
    }
}
