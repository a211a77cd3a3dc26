//! Google Gemini provider.
//!
//! Uses the official `generateContent` REST API. Unlike the other two
//! protocols, the model lives in the URL path and the API key travels as
//! a query parameter rather than a header.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use termfolio_core::{ChatConfig, ChatMessage};

use crate::error::ProviderError;
use crate::traits::{build_http_client, http_error, normalize_base_url, ChatProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini content-generation client.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Instruction>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Instruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

impl GeminiProvider {
    /// Create a new provider from chat settings. No network I/O happens
    /// here.
    pub fn new(config: &ChatConfig) -> Self {
        let base_url = normalize_base_url(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL));

        GeminiProvider {
            client: build_http_client(),
            api_key: config.api_key.clone(),
            base_url,
            model: config.model.clone(),
        }
    }

    /// Endpoint: `{base}/v1beta/models/{model}:generateContent`.
    fn generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Translate canonical messages into the Gemini request shape.
    ///
    /// The system message leaves the conversation list and becomes a
    /// separate `systemInstruction`; `assistant` turns map to the
    /// `model` role.
    fn build_request(&self, messages: &[ChatMessage]) -> GenerateRequest {
        let contents = messages
            .iter()
            .filter(|m| !m.is_system())
            .map(|m| Content {
                role: match m {
                    ChatMessage::Assistant { .. } => "model",
                    _ => "user",
                },
                parts: vec![Part {
                    text: m.content().to_string(),
                }],
            })
            .collect();

        let system_instruction = messages.iter().find(|m| m.is_system()).map(|m| Instruction {
            parts: vec![Part {
                text: m.content().to_string(),
            }],
        });

        GenerateRequest {
            contents,
            system_instruction,
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = self.build_request(messages);

        debug!(
            provider = self.display_name(),
            model = %self.model,
            messages = messages.len(),
            "calling generateContent"
        );

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = http_error(response).await;
            error!(provider = self.display_name(), error = %err, "API error");
            return Err(err);
        }

        let parsed: GenerateResponse = response.json().await?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }

    fn display_name(&self) -> &'static str {
        "Gemini"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_config(api_key: &str, base_url: Option<&str>) -> ChatConfig {
        ChatConfig {
            provider: "gemini".to_string(),
            api_key: api_key.to_string(),
            base_url: base_url.map(String::from),
            model: "gemini-2.0-flash".to_string(),
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
        let provider = GeminiProvider::new(&make_config("key", None));
        assert_eq!(
            provider.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_normalized() {
        let provider =
            GeminiProvider::new(&make_config("key", Some("https://relay.example.com/v1/")));
        assert_eq!(
            provider.generate_url(),
            "https://relay.example.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_system_message_extracted_not_duplicated() {
        let provider = GeminiProvider::new(&make_config("key", None));
        let request = provider.build_request(&sample_conversation());

        // System content goes to systemInstruction only
        let instruction = request.system_instruction.expect("systemInstruction set");
        assert_eq!(instruction.parts[0].text, "You are a portfolio assistant.");

        // Conversation list holds the three non-system messages
        assert_eq!(request.contents.len(), 3);
        for content in &request.contents {
            assert_ne!(content.parts[0].text, "You are a portfolio assistant.");
        }
    }

    #[test]
    fn test_role_mapping() {
        let provider = GeminiProvider::new(&make_config("key", None));
        let request = provider.build_request(&sample_conversation());

        assert_eq!(request.contents[0].role, "user");
        assert_eq!(request.contents[1].role, "model");
        assert_eq!(request.contents[2].role, "user");
    }

    #[test]
    fn test_no_system_instruction_without_system_message() {
        let provider = GeminiProvider::new(&make_config("key", None));
        let request = provider.build_request(&[ChatMessage::user("hi")]);

        assert!(request.system_instruction.is_none());
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_each_message_is_one_part() {
        let provider = GeminiProvider::new(&make_config("key", None));
        let request = provider.build_request(&sample_conversation());

        for content in &request.contents {
            assert_eq!(content.parts.len(), 1);
        }
    }

    // ── Integration tests with mock server ──

    #[tokio::test]
    async fn test_chat_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "g-key-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "I mostly build backend services." }]
                    }
                }]
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new(&make_config("g-key-123", Some(&mock_server.uri())));

        let reply = provider.chat(&sample_conversation()).await.unwrap();
        assert_eq!(reply, "I mostly build backend services.");
    }

    #[tokio::test]
    async fn test_chat_http_error_unparsable_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new(&make_config("key", Some(&mock_server.uri())));

        let err = provider.chat(&[ChatMessage::user("hi")]).await.unwrap_err();
        match err {
            ProviderError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, serde_json::json!({}));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_chat_no_candidates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new(&make_config("key", Some(&mock_server.uri())));

        let err = provider.chat(&[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_chat_candidate_without_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{}] } }]
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new(&make_config("key", Some(&mock_server.uri())));

        let err = provider.chat(&[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }
}
