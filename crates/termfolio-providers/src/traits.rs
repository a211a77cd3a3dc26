//! The `ChatProvider` trait plus helpers shared by all three adapters.

use async_trait::async_trait;
use termfolio_core::ChatMessage;

use crate::error::ProviderError;

/// Trait that all AI providers implement.
///
/// One network round-trip per call; no retries, no streaming. Adapters
/// are immutable after construction.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a conversation and get the assistant's reply text.
    ///
    /// `messages` is in canonical form: at most one leading `System`
    /// entry, then alternating `User`/`Assistant` turns.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;

    /// Display name for logging.
    fn display_name(&self) -> &'static str;
}

/// Normalize a base URL: strip trailing slashes, then a trailing `/v1`
/// segment. Callers may hand us either a bare host or a host + `/v1`
/// (common for relays) and get consistent endpoint construction.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    trimmed.strip_suffix("/v1").unwrap_or(trimmed).to_string()
}

/// Build the shared HTTP client (connection-pooled, 120s timeout).
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .expect("Failed to build HTTP client")
}

/// Convert a non-success response into `ProviderError::Http`.
///
/// The error body is parsed best-effort: an unparsable body becomes an
/// empty JSON object rather than a secondary failure, so callers always
/// get a structured error.
pub(crate) async fn http_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({}));
    ProviderError::Http { status, body }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.openai.com/"),
            "https://api.openai.com"
        );
    }

    #[test]
    fn test_normalize_strips_v1_suffix() {
        assert_eq!(
            normalize_base_url("https://relay.example.com/v1"),
            "https://relay.example.com"
        );
    }

    #[test]
    fn test_normalize_strips_v1_and_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://relay.example.com/v1/"),
            "https://relay.example.com"
        );
    }

    #[test]
    fn test_normalize_leaves_bare_host() {
        assert_eq!(
            normalize_base_url("https://api.anthropic.com"),
            "https://api.anthropic.com"
        );
    }

    #[test]
    fn test_normalize_keeps_non_v1_path() {
        assert_eq!(
            normalize_base_url("https://gateway.example.com/llm"),
            "https://gateway.example.com/llm"
        );
    }

    #[test]
    fn test_normalize_multiple_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://api.openai.com///"),
            "https://api.openai.com"
        );
    }
}
