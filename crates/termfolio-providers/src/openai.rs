//! OpenAI-compatible provider.
//!
//! Works with the OpenAI API and any service implementing the same
//! interface (Azure OpenAI, custom relays/proxies).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use termfolio_core::{ChatConfig, ChatMessage};

use crate::error::ProviderError;
use crate::traits::{build_http_client, http_error, normalize_base_url, ChatProvider};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Upper bound on generated tokens.
const MAX_TOKENS: u32 = 1000;
/// Moderate sampling temperature for consistent public-facing replies.
const TEMPERATURE: f64 = 0.7;

/// OpenAI-compatible chat completions client.
///
/// The system message stays inline in the message list — the canonical
/// schema already serializes to this provider's wire shape.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

#[derive(Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct CompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

impl OpenAiProvider {
    /// Create a new provider from chat settings. No network I/O happens
    /// here.
    pub fn new(config: &ChatConfig) -> Self {
        let base_url = normalize_base_url(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL));

        OpenAiProvider {
            client: build_http_client(),
            api_key: config.api_key.clone(),
            base_url,
            model: config.model.clone(),
        }
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = CompletionsRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(
            provider = self.display_name(),
            model = %self.model,
            messages = messages.len(),
            "calling chat completions"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = http_error(response).await;
            error!(provider = self.display_name(), error = %err, "API error");
            return Err(err);
        }

        let parsed: CompletionsResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
