//! Single point of entry for LLM completion calls.
//!
//! Other modules never talk to the provider directly; they go through `LlmClient`.
//! A client built without an API key is *disabled*: every call fails fast with
//! `LlmError::Disabled`, which callers treat like any other failure and fall back.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;
const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM client is disabled (no API key configured)")]
    Disabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Outcome of a single HTTP attempt.
enum Attempt {
    Done(String),
    Retry(LlmError),
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// A client that never reaches the network.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one prompt and returns the first text block of the reply.
    /// Retries 429 and 5xx responses (and transport errors) with exponential backoff.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::Disabled)?;
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error = LlmError::EmptyContent;
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "LLM attempt {attempt} failed ({last_error}), retrying in {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.send_once(api_key, &body).await? {
                Attempt::Done(text) => return Ok(text),
                Attempt::Retry(e) => last_error = e,
            }
        }

        Err(last_error)
    }

    /// Calls the LLM and deserializes the reply as JSON.
    /// The prompt must instruct the model to return a bare JSON value.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, system).await?;
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }

    async fn send_once(
        &self,
        api_key: &str,
        body: &MessagesRequest<'_>,
    ) -> Result<Attempt, LlmError> {
        let response = match self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return Ok(Attempt::Retry(LlmError::Http(e))),
        };

        let status = response.status();
        if is_retryable(status) {
            let message = response.text().await.unwrap_or_default();
            return Ok(Attempt::Retry(LlmError::Api {
                status: status.as_u16(),
                message,
            }));
        }
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        debug!(
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "LLM call succeeded"
        );

        parsed
            .content
            .into_iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text)
            .map(Attempt::Done)
            .ok_or(LlmError::EmptyContent)
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// 1s, 2s, 4s, ... for attempt 1, 2, 3, ...
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(1000 * (1u64 << attempt.saturating_sub(1)))
}

/// Strips a ```json ... ``` (or bare ```) fence the model sometimes wraps around JSON.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"score\": 70}\n```";
        assert_eq!(strip_json_fences(input), "{\"score\": 70}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"score\": 70}\n```";
        assert_eq!(strip_json_fences(input), "{\"score\": 70}");
    }

    #[test]
    fn test_strip_json_fences_leaves_plain_json() {
        assert_eq!(strip_json_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_disabled_client_fails_fast() {
        let client = LlmClient::disabled();
        assert!(!client.is_enabled());
        let err = client.complete("hi", "system").await.unwrap_err();
        assert!(matches!(err, LlmError::Disabled));
    }
}
