//! Anthropic-compatible provider.
//!
//! Talks the Messages API; works with the official endpoint and
//! compatible relays. The API requires `max_tokens` and carries the
//! system prompt as a top-level field.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use termfolio_core::{ChatConfig, ChatMessage};

use crate::error::ProviderError;
use crate::traits::{build_http_client, http_error, normalize_base_url, ChatProvider};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Required by the Messages API.
const MAX_TOKENS: u32 = 1000;

/// Anthropic Messages API client.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

impl AnthropicProvider {
    /// Create a new provider from chat settings. No network I/O happens
    /// here.
    pub fn new(config: &ChatConfig) -> Self {
        let base_url = normalize_base_url(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL));

        AnthropicProvider {
            client: build_http_client(),
            api_key: config.api_key.clone(),
            base_url,
            model: config.model.clone(),
        }
    }

    /// Endpoint: `{base}/v1/messages`.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Translate canonical messages into the Messages API shape.
    ///
    /// The system message moves to the top-level `system` field; the
    /// remaining roles pass through.
    fn build_request<'a>(&'a self, messages: &'a [ChatMessage]) -> MessagesRequest<'a> {
        let wire_messages = messages
            .iter()
            .filter(|m| !m.is_system())
            .map(|m| WireMessage {
                role: match m {
                    ChatMessage::Assistant { .. } => "assistant",
                    _ => "user",
                },
                content: m.content(),
            })
            .collect();

        let system = messages
            .iter()
            .find(|m| m.is_system())
            .map(|m| m.content());

        MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: wire_messages,
            system,
        }
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = self.build_request(messages);

        debug!(
            provider = self.display_name(),
            model = %self.model,
            messages = messages.len(),
            "calling messages API"
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = http_error(response).await;
            error!(provider = self.display_name(), error = %err, "API error");
            return Err(err);
        }

        let parsed: MessagesResponse = response.json().await?;

        parsed
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }

    fn display_name(&self) -> &'static str {
        "Anthropic"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_config(api_key: &str, base_url: Option<&str>) -> ChatConfig {
        ChatConfig {
            provider: "anthropic".to_string(),
            api_key: api_key.to_string(),
            base_url: base_url.map(String::from),
            model: "claude-sonnet-4-20250514".to_string(),
            ..Default::default()
        }
    }

    fn sample_conversation() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are a portfolio assistant."),
            ChatMessage::user("Hello"),
            ChatMessage::assistant("Hi there!"),
            ChatMessage::user("What do you work on?"),
        ]
    }

    // ── Unit tests: request translation ──

    #[test]
    fn test_default_base_url() {
        let provider = AnthropicProvider::new(&make_config("key", None));
        assert_eq!(
            provider.messages_url(),
            "https://api.anthropic.com/v1/messages"
        );
    }

    #[test]
    fn test_base_url_normalized() {
        let provider =
            AnthropicProvider::new(&make_config("key", Some("https://relay.example.com/v1/")));
        assert_eq!(
            provider.messages_url(),
            "https://relay.example.com/v1/messages"
        );
    }

    #[test]
    fn test_system_moves_to_top_level_field() {
        let provider = AnthropicProvider::new(&make_config("key", None));
        let conversation = sample_conversation();
        let request = provider.build_request(&conversation);

        assert_eq!(request.system, Some("You are a portfolio assistant."));
        assert_eq!(request.messages.len(), 3);
        for msg in &request.messages {
            assert_ne!(msg.content, "You are a portfolio assistant.");
        }
    }

    #[test]
    fn test_roles_pass_through() {
        let provider = AnthropicProvider::new(&make_config("key", None));
        let conversation = sample_conversation();
        let request = provider.build_request(&conversation);

        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[1].role, "assistant");
        assert_eq!(request.messages[2].role, "user");
    }

    #[test]
    fn test_system_field_absent_without_system_message() {
        let provider = AnthropicProvider::new(&make_config("key", None));
        let messages = [ChatMessage::user("hi")];
        let request = provider.build_request(&messages);

        assert!(request.system.is_none());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("system").is_none());
    }

    #[test]
    fn test_max_tokens_always_present() {
        let provider = AnthropicProvider::new(&make_config("key", None));
        let messages = [ChatMessage::user("hi")];
        let request = provider.build_request(&messages);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["model"], "claude-sonnet-4-20250514");
    }

    // ── Integration tests with mock server ──

    #[tokio::test]
    async fn test_chat_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-ant-123"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(serde_json::json!({
                "model": "claude-sonnet-4-20250514",
                "max_tokens": 1000,
                "system": "You are a portfolio assistant."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "msg_test",
                "content": [{ "type": "text", "text": "Happy to help." }],
                "stop_reason": "end_turn"
            })))
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::new(&make_config("sk-ant-123", Some(&mock_server.uri())));

        let reply = provider.chat(&sample_conversation()).await.unwrap();
        assert_eq!(reply, "Happy to help.");
    }

    #[tokio::test]
    async fn test_chat_http_error_unparsable_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::new(&make_config("key", Some(&mock_server.uri())));

        let err = provider.chat(&[ChatMessage::user("hi")]).await.unwrap_err();
        match err {
            ProviderError::Http { status, body } => {
                assert_eq!(status, 529);
                assert_eq!(body, serde_json::json!({}));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_empty_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "content": [] })),
            )
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::new(&make_config("key", Some(&mock_server.uri())));

        let err = provider.chat(&[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }
}
