use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Question is empty")]
    EmptyQuestion,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Anthropic API returned {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Failed to parse Anthropic API response")]
    JsonParse(#[from] serde_json::Error),

    #[error("Anthropic API response contained no text")]
    EmptyResponse,
}
