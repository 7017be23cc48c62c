//! Third-party chat-completion client used for ad copy.
//!
//! The browser calls the completion endpoint directly with the user's own key;
//! the key never reaches the catalog backend or the host.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

use super::error::ConsoleError;

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Produces free text for a single prompt.
#[allow(async_fn_in_trait)]
pub trait CompletionClient {
    /// Send `prompt` as one user message and return the reply text.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ConsoleError>;
}

/// `OpenAI`-compatible `/chat/completions` client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenAiCompletion {
    base_url: String,
    model: String,
}

impl Default for OpenAiCompletion {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETION_BASE_URL, DEFAULT_COMPLETION_MODEL)
    }
}

impl OpenAiCompletion {
    #[must_use]
    pub fn new(base_url: &str, model: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), model: model.to_owned() }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionClient for OpenAiCompletion {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ConsoleError> {
        #[cfg(feature = "hydrate")]
        {
            let body = build_request(&self.model, prompt);
            let resp = gloo_net::http::Request::post(&self.endpoint())
                .header("Authorization", &format!("Bearer {api_key}"))
                .json(&body)
                .map_err(|e| ConsoleError::ThirdParty(e.to_string()))?
                .send()
                .await
                .map_err(|e| ConsoleError::ThirdParty(e.to_string()))?;
            if !resp.ok() {
                return Err(ConsoleError::ThirdParty(format!("status {}", resp.status())));
            }
            let text = resp
                .text()
                .await
                .map_err(|e| ConsoleError::ThirdParty(e.to_string()))?;
            parse_completion(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api_key, prompt);
            Err(ConsoleError::Unavailable)
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 1],
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReply,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn build_request<'a>(model: &'a str, prompt: &'a str) -> CompletionRequest<'a> {
    CompletionRequest { model, messages: [CompletionMessage { role: "user", content: prompt }] }
}

/// Extract the first choice's text from a `/chat/completions` body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_completion(text: &str) -> Result<String, ConsoleError> {
    let resp: CompletionResponse =
        serde_json::from_str(text).map_err(|e| ConsoleError::ThirdParty(format!("unreadable reply: {e}")))?;
    resp.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| ConsoleError::ThirdParty("reply contained no text".to_owned()))
}
