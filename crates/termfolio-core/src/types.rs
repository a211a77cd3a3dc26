//! The canonical chat message model.
//!
//! Every provider protocol is translated from this one role-based schema.
//! The enum serializes to the OpenAI wire shape
//! (`{"role": "user", "content": "..."}`), so the OpenAI-compatible
//! adapter can send a message list through untouched while the other
//! adapters restructure it.

use serde::{Deserialize, Serialize};

/// A single chat message. Ordering within a list is conversation order.
///
/// By convention a `System` message appears at most once per request,
/// first. Session history never stores one — the system prompt is
/// reattached fresh on every call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    System { content: String },
    User { content: String },
    Assistant { content: String },
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage::Assistant {
            content: content.into(),
        }
    }

    /// The message text, independent of role.
    pub fn content(&self) -> &str {
        match self {
            ChatMessage::System { content }
            | ChatMessage::User { content }
            | ChatMessage::Assistant { content } => content,
        }
    }

    /// Whether this is a system message.
    pub fn is_system(&self) -> bool {
        matches!(self, ChatMessage::System { .. })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
