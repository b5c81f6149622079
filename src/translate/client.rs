//! The text-completion capability used for translation.
//!
//! [`CompletionClient`] is the seam between the batching logic and the
//! network. [`HttpCompletionClient`] speaks the OpenAI-compatible chat
//! completions protocol.

use std::{future::Future, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::truncate_chars;

/// Response bodies are cut to this many characters in errors.
const MAX_BODY_CHARS: usize = 500;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON response ({source}): {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response contained no completion text")]
    EmptyCompletion,
}

/// Sends one instruction and returns one completion string.
pub trait CompletionClient {
    fn complete(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpCompletionClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ServiceError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body: truncate_chars(&body, MAX_BODY_CHARS),
            });
        }

        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String, ServiceError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|source| ServiceError::Parse {
            body: truncate_chars(body, MAX_BODY_CHARS),
            source,
        })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(ServiceError::EmptyCompletion)
}
