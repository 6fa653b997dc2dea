use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TextGenerator;

pub const MODEL: &str = "claude-sonnet-4-5-20250929";
const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

/// Anthropic Messages API client. Built once at startup and shared.
#[derive(Clone)]
pub struct AnthropicService {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl AnthropicService {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: format!("{}/v1/messages", base_url.trim_end_matches('/')),
        }
    }

    pub fn model(&self) -> &'static str {
        MODEL
    }
}

#[async_trait]
impl TextGenerator for AnthropicService {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens,
            system: system_prompt,
            messages: [ChatMessage {
                role: "user",
                content: user_message,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_else(|e| e.to_string());
            return Err(match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => anyhow!(
                    "{} {}: {}",
                    status,
                    envelope.error.kind,
                    envelope.error.message
                ),
                Err(_) => anyhow!("{} {}", status, text),
            });
        }

        let body = response.text().await?;
        let parsed: MessagesResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow!("malformed response from upstream: {e}"))?;

        debug!(blocks = parsed.content.len(), "upstream response received");

        match parsed.content.into_iter().next() {
            Some(ContentBlock::Text { text }) => Ok(text),
            Some(ContentBlock::Other) => Err(anyhow!(
                "malformed response from upstream: first content block is not text"
            )),
            None => Err(anyhow!(
                "malformed response from upstream: no content blocks"
            )),
        }
    }
}
