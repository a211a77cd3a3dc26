//! System prompt assembly.
//!
//! The prompt is a fixed preamble naming the portfolio owner, followed by
//! an optional markdown profile document loaded from disk. The profile is
//! reattached fresh on every call — it is never stored in history.

use termfolio_core::{utils, PersonaConfig};
use tracing::{debug, warn};

/// Build the full system prompt for a persona.
///
/// A missing or unreadable profile file is not an error: the assistant
/// still runs on the preamble alone.
pub fn build_system_prompt(persona: &PersonaConfig) -> String {
    let mut parts = vec![preamble(&persona.name)];

    if let Some(profile) = &persona.profile {
        let path = utils::expand_home(profile);
        if path.is_file() {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    debug!(file = %path.display(), "loaded profile document");
                    parts.push(content);
                }
                Err(e) => warn!(file = %path.display(), "failed to read profile: {e}"),
            }
        }
    }

    parts.join("\n\n")
}

/// Fixed assistant preamble.
fn preamble(name: &str) -> String {
    format!(
        "You are an AI assistant embedded in {name}'s portfolio terminal. \
         Answer visitors' questions about {name}'s background, skills, and \
         projects. Keep replies concise and friendly; say so when you don't \
         know something."
    )
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
