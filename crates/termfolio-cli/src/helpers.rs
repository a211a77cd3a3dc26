//! Shared CLI helpers — banner, reply printing, error-to-user mapping.

use colored::Colorize;

use termfolio_chat::{ChatError, ChatReply};
use termfolio_providers::ProviderError;

/// Print the banner shown at terminal start.
pub fn print_banner(owner: &str) {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "▞ termfolio".cyan().bold(), version.dimmed());
    println!("{}", format!("{owner}'s portfolio terminal.").dimmed());
    println!(
        "{}",
        "Type /help for commands, ask anything else, or \"exit\" to quit.".dimmed()
    );
    println!();
}

/// Print an assistant reply, with a remaining-turns hint once the
/// session is close to its limit.
pub fn print_reply(reply: &ChatReply) {
    println!();
    println!("{}", "▞ assistant".cyan().bold());
    println!("{}", reply.content);
    if reply.remaining <= 3 {
        println!(
            "{}",
            format!("({} questions left this session)", reply.remaining).dimmed()
        );
    }
    println!();
}

/// Print a chat failure in user-facing terms.
///
/// Provider transport/protocol failures collapse into a generic
/// "try again later" message — the diagnostic detail has already been
/// logged at the provider layer.
pub fn print_chat_error(error: &ChatError) {
    eprintln!();
    eprintln!("{} {}", "✗".red(), chat_error_message(error));
    eprintln!();
}

/// Map a chat failure to the message a visitor should see.
pub fn chat_error_message(error: &ChatError) -> String {
    match error {
        ChatError::NotConfigured => {
            "AI chat is not configured. Explore the portfolio with /help instead.".to_string()
        }
        ChatError::RateLimited { limit } => format!(
            "You've reached the limit of {limit} AI questions this session. \
             Restart the terminal to start a new session, or keep exploring with the commands!"
        ),
        ChatError::Provider(ProviderError::Unsupported { .. })
        | ChatError::Provider(ProviderError::Configuration(_)) => {
            // Developer-facing misconfiguration: surface it verbatim
            error.to_string()
        }
        ChatError::Provider(ProviderError::Network(_)) => {
            "Network error. Please check your connection and try again.".to_string()
        }
        ChatError::Provider(_) => {
            "The assistant is unavailable right now. Please try again later.".to_string()
        }
    }
}

/// Print a "thinking" placeholder while a request is in flight.
pub fn print_thinking() {
    eprint!("{}", "⠿ thinking...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_message_names_limit() {
        let msg = chat_error_message(&ChatError::RateLimited { limit: 10 });
        assert!(msg.contains("10"));
        assert!(msg.contains("new session"));
    }

    #[test]
    fn test_not_configured_message() {
        let msg = chat_error_message(&ChatError::NotConfigured);
        assert!(msg.contains("not configured"));
    }

    #[test]
    fn test_http_error_is_generic_for_visitors() {
        let err = ChatError::Provider(ProviderError::Http {
            status: 500,
            body: serde_json::json!({"error": "internal"}),
        });
        let msg = chat_error_message(&err);
        assert!(msg.contains("try again later"));
        // Status and body stay in the logs, not on screen
        assert!(!msg.contains("500"));
    }

    #[test]
    fn test_empty_response_reads_like_transport_failure() {
        let msg = chat_error_message(&ChatError::Provider(ProviderError::EmptyResponse));
        assert!(msg.contains("try again later"));
    }

    #[test]
    fn test_unsupported_provider_is_surfaced_verbatim() {
        let err = ChatError::Provider(ProviderError::Unsupported {
            provider: "mistral".to_string(),
        });
        let msg = chat_error_message(&err);
        assert!(msg.contains("mistral"));
        assert!(msg.contains("gemini, openai, anthropic"));
    }
}
