use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Boundary to the language-model provider: one prompt in, free text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Anthropic Messages API client.
pub struct AnthropicModel {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
}

impl AnthropicModel {
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: config.anthropic_api_key.clone(),
            model: config.anthropic_model.clone(),
            max_tokens: config.anthropic_max_tokens,
        }
    }
}

/// Pulls the reply text out of a Messages API response body.
fn extract_reply_text(body: &serde_json::Value) -> Option<String> {
    body.get("content")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_owned)
}

#[async_trait]
impl CompletionModel for AnthropicModel {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let response = self
            .client
            .post(ANTHROPIC_MESSAGES_URL)
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach model API: {}", e);
                AppError::UpstreamError(format!("model API unreachable: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Model API error {}: {}", status, body);
            return Err(AppError::UpstreamError(format!(
                "model API error {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AppError::UpstreamError(format!("failed to parse model response: {}", e))
        })?;

        extract_reply_text(&body)
            .ok_or_else(|| AppError::UpstreamError("no reply text in model response".to_string()))
    }
}
