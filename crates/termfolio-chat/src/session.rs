//! The conversation session — bounded history, session rate limit, and
//! orchestration of provider calls.
//!
//! Two gates run before any I/O (configuration, rate limit), then one
//! mutation step after the round-trip resolves. A rejected or failed call
//! leaves session state byte-for-byte unchanged, so callers can retry
//! without double-counting.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use termfolio_core::{ChatConfig, ChatMessage};
use termfolio_providers::{create_provider, ProviderError};

/// A successful exchange: the assistant's reply plus how many turns are
/// left this session.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub remaining: u32,
}

/// Failures surfaced to the terminal layer. No provider error crosses
/// this boundary unwrapped.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key present — the integration was never enabled.
    #[error("AI chat is not configured")]
    NotConfigured,

    /// The session hit its conversation limit. Recoverable only by
    /// starting a new session.
    #[error(
        "you've reached the limit of {limit} AI conversations this session; \
         start a new session, or explore the commands instead"
    )]
    RateLimited { limit: u32 },

    /// The provider call failed; terminal for this turn.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A single visitor's conversation with the portfolio assistant.
///
/// Owns its history exclusively. Created once at startup with an empty
/// history and a zero turn count; reset only by restarting the process.
/// History holds `User`/`Assistant` entries only — the system prompt is
/// reattached fresh on every call.
pub struct ChatSession {
    config: ChatConfig,
    system_prompt: String,
    history: Vec<ChatMessage>,
    turn_count: u32,
    started_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create a fresh session.
    pub fn new(config: ChatConfig, system_prompt: impl Into<String>) -> Self {
        ChatSession {
            config,
            system_prompt: system_prompt.into(),
            history: Vec::new(),
            turn_count: 0,
            started_at: Utc::now(),
        }
    }

    /// Whether chat is enabled (an API key is present).
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Exchanges left before the session limit trips.
    pub fn remaining_turns(&self) -> u32 {
        self.config.max_turns.saturating_sub(self.turn_count)
    }

    /// Completed exchanges so far.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Retained conversation history (oldest first).
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// When this session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Submit a visitor question and get the assistant's reply.
    ///
    /// Gate order matters: configuration, then rate limit, then the
    /// network call. Neither gate touches history or the counter, and a
    /// failed exchange doesn't either.
    pub async fn submit(&mut self, text: &str) -> Result<ChatReply, ChatError> {
        if !self.is_configured() {
            return Err(ChatError::NotConfigured);
        }

        if self.turn_count >= self.config.max_turns {
            return Err(ChatError::RateLimited {
                limit: self.config.max_turns,
            });
        }

        let provider = create_provider(&self.config)?;

        // [system prompt] ++ history ++ [new question]
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(ChatMessage::system(&self.system_prompt));
        messages.extend_from_slice(&self.history);
        messages.push(ChatMessage::user(text));

        debug!(
            turn = self.turn_count + 1,
            history = self.history.len(),
            "submitting exchange"
        );

        let content = match provider.chat(&messages).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "chat exchange failed");
                return Err(e.into());
            }
        };

        self.history.push(ChatMessage::user(text));
        self.history.push(ChatMessage::assistant(content.clone()));

        // FIFO eviction down to the configured window
        if self.history.len() > self.config.history_window {
            let excess = self.history.len() - self.config.history_window;
            self.history.drain(..excess);
        }

        self.turn_count += 1;

        Ok(ChatReply {
            content,
            remaining: self.remaining_turns(),
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
