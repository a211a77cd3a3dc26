//! Configuration schema.
//!
//! Hierarchy: `Config` → `ChatConfig`, `PersonaConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.termfolio/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub chat: ChatConfig,
    pub persona: PersonaConfig,
}

// ─────────────────────────────────────────────
// Chat / provider settings
// ─────────────────────────────────────────────

/// AI chat settings: which provider to talk to and the session limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatConfig {
    /// Provider identifier: `"gemini"`, `"openai"`, or `"anthropic"`.
    pub provider: String,
    /// API key for authentication. Empty = chat disabled.
    #[serde(default)]
    pub api_key: String,
    /// Custom API base URL (overrides the provider default; useful for
    /// relays and proxies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model identifier (e.g. `"gpt-4o-mini"`, `"claude-sonnet-4-20250514"`).
    pub model: String,
    /// Maximum AI exchanges per session.
    pub max_turns: u32,
    /// Maximum retained history messages used as context.
    pub history_window: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_key: String::new(),
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            max_turns: 10,
            history_window: 10,
        }
    }
}

impl ChatConfig {
    /// Whether chat is enabled. Only the API key is required — the base
    /// URL has a per-provider default.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// ─────────────────────────────────────────────
// Persona
// ─────────────────────────────────────────────

/// Who the terminal speaks for. Feeds the assistant's system prompt.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonaConfig {
    /// Display name of the portfolio owner.
    pub name: String,
    /// Optional path to a markdown profile document injected into the
    /// system prompt (supports `~`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: "Rowan Hale".to_string(),
            profile: None,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
