//! Provider error taxonomy.

use thiserror::Error;

/// Errors from provider construction and chat calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A required configuration field was missing or empty at
    /// construction time. Not recoverable by retry.
    #[error("provider configuration incomplete: {0} is required")]
    Configuration(&'static str),

    /// The configured provider identifier doesn't match a known adapter.
    #[error("unknown provider: {provider}. Supported providers: gemini, openai, anthropic")]
    Unsupported { provider: String },

    /// The provider returned a non-success HTTP status. `body` is the
    /// parsed error body, or an empty object when the body isn't JSON.
    #[error("provider returned HTTP {status}: {body}")]
    Http {
        status: u16,
        body: serde_json::Value,
    },

    /// A well-formed response with no extractable text — a protocol-shape
    /// mismatch or provider-side content filtering, not a transport
    /// problem.
    #[error("empty response from provider")]
    EmptyResponse,

    /// Transport-level failure (connect, timeout, body decode).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
