//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! No other module may call the GitHub Models API directly.
//!
//! Model and temperature are hardcoded; only the endpoint URL may be overridden
//! (personal vs. organisation-billed inference).

use std::time::Duration;

use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Personal-account inference endpoint. Organisations use
/// `https://models.github.ai/orgs/<ORG>/inference/chat/completions`.
pub const GITHUB_MODELS_URL: &str = "https://models.github.ai/inference/chat/completions";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
/// The model used for every relay call.
pub const MODEL: &str = "openai/gpt-4o-mini";
pub const TEMPERATURE: f32 = 0.7;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response schema")]
    UnexpectedSchema { raw: Value },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, if the model returned any.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// Wraps the GitHub Models chat-completions API. One request, no retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl LlmClient {
    pub fn new(token: String, endpoint: String) -> Result<Self, LlmError> {
        Self::with_timeout(token, endpoint, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        token: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a system + user exchange and returns the first choice's content.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let content = extract_content(&body)?;
        debug!("Chat completion succeeded: {} bytes", content.len());
        Ok(content)
    }
}

/// Pulls `choices[0].message.content` out of a raw upstream body.
/// Anything else is reported with the raw payload attached.
fn extract_content(body: &str) -> Result<String, LlmError> {
    let raw: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => {
            return Err(LlmError::UnexpectedSchema {
                raw: Value::String(body.to_string()),
            })
        }
    };

    let content = serde_json::from_value::<ChatResponse>(raw.clone())
        .ok()
        .and_then(|r| r.content().map(str::to_string));

    match content {
        Some(text) => Ok(text),
        None => Err(LlmError::UnexpectedSchema { raw }),
    }
}
