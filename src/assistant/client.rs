//! A thin client for the Anthropic Messages API, used to answer free-text
//! questions about ocean conditions.

use crate::assistant::error::AssistantError;
use crate::config::Config;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct OceanAssistant {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl OceanAssistant {
    /// Fails with [`crate::ConfigError::MissingVar`] when no API key is configured.
    pub fn new(client: Client, config: &Config) -> Result<Self, AssistantError> {
        Ok(Self {
            client,
            url: config.anthropic_url.clone(),
            api_key: config.require_api_key()?.to_string(),
            model: config.anthropic_model.clone(),
            max_tokens: config.max_tokens,
            timeout: config.assistant_timeout,
        })
    }

    /// Sends `question` as a single user turn and returns the model's text.
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        info!("Sending ocean analysis request to {}", self.model);
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: [Message {
                role: "user",
                content: question,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AssistantError::NetworkRequest(self.url.clone(), e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AssistantError::NetworkRequest(self.url.clone(), e))?;
        parse_messages_response(status, &bytes)
    }
}

pub(crate) fn parse_messages_response(
    status: StatusCode,
    body: &[u8],
) -> Result<String, AssistantError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned());
        warn!("Anthropic API error {}: {}", status, message);
        return Err(AssistantError::Api { status, message });
    }

    let response: MessagesResponse = serde_json::from_slice(body)?;
    response
        .content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or(AssistantError::EmptyResponse)
}
