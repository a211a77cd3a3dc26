//! Interactive terminal loop.
//!
//! Uses `rustyline` for readline-style editing with persistent input
//! history. Slash commands render locally; anything else goes to the
//! chat session, one request in flight at a time.

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use termfolio_chat::ChatSession;

use crate::commands::{self, Input, TermCommand};
use crate::helpers;

/// Exit commands (case-insensitive match).
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

const PROMPT: &str = "guest@termfolio:~$ ";

/// Run the interactive terminal loop.
pub async fn run(mut session: ChatSession, owner: &str) -> Result<()> {
    helpers::print_banner(owner);

    let mut editor = create_editor()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ctrl-C — exit cleanly
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                // Ctrl-D — exit cleanly
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_exit_command(trimmed) {
            println!("\nThanks for stopping by! 👋");
            break;
        }

        let _ = editor.add_history_entry(&line);

        match commands::parse_input(trimmed) {
            Input::Empty => continue,
            Input::Command(command) => run_command(&command, &session),
            Input::Question(question) => {
                debug!(question = %question, "routing to assistant");
                helpers::print_thinking();
                let result = session.submit(&question).await;
                helpers::clear_thinking();
                match result {
                    Ok(reply) => helpers::print_reply(&reply),
                    Err(e) => helpers::print_chat_error(&e),
                }
            }
        }
    }

    save_history(&mut editor);

    Ok(())
}

/// Execute a slash command against the terminal.
fn run_command(command: &TermCommand, session: &ChatSession) {
    match command {
        TermCommand::Help => print!("{}", commands::help_text()),
        TermCommand::About => print!("{}", commands::about_text()),
        TermCommand::Skills => print!("{}", commands::skills_text()),
        TermCommand::Projects => print!("{}", commands::projects_text()),
        TermCommand::Contact => print!("{}", commands::contact_text()),
        TermCommand::Status => print!("{}", session_status_text(session)),
        TermCommand::Clear => clear_screen(),
        TermCommand::Unknown(cmd) => print!("{}", commands::unknown_text(cmd)),
    }
}

/// In-terminal session status (`/status`).
fn session_status_text(session: &ChatSession) -> String {
    use colored::Colorize;

    let assistant = if session.is_configured() {
        format!(
            "{} ({} of {} questions left)",
            "enabled".green(),
            session.remaining_turns(),
            session.turn_count() + session.remaining_turns(),
        )
    } else {
        "disabled (no API key)".dimmed().to_string()
    };

    format!(
        "{}\n  {:<12} {}\n  {:<12} {}\n",
        "SESSION".cyan().bold(),
        "Assistant:",
        assistant,
        "Started:",
        session.started_at().format("%Y-%m-%d %H:%M UTC"),
    )
}

fn clear_screen() {
    // ANSI: clear screen + move cursor home
    print!("\x1b[2J\x1b[1;1H");
}

/// Create a rustyline editor with history.
fn create_editor() -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;

    let history_path = history_path();
    if history_path.exists() {
        let _ = editor.load_history(&history_path);
        debug!("loaded input history from {}", history_path.display());
    }

    Ok(editor)
}

/// Save history to disk.
fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

/// Path to the input history file.
fn history_path() -> std::path::PathBuf {
    termfolio_core::utils::get_data_path()
        .join("history")
        .join("cli_history")
}

/// Check if input is an exit command.
fn is_exit_command(input: &str) -> bool {
    let lower = input.to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::ChatConfig;

    #[test]
    fn exit_commands() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("/quit"));
        assert!(is_exit_command(":q"));
        assert!(!is_exit_command("hello"));
        assert!(!is_exit_command("/help"));
    }

    #[test]
    fn history_path_under_data_dir() {
        let path = history_path();
        assert!(path.to_string_lossy().contains(".termfolio"));
        assert!(path.to_string_lossy().contains("cli_history"));
    }

    #[test]
    fn status_shows_disabled_without_key() {
        let session = ChatSession::new(ChatConfig::default(), "prompt");
        let status = session_status_text(&session);
        assert!(status.contains("disabled"));
    }

    #[test]
    fn status_shows_remaining_with_key() {
        let session = ChatSession::new(
            ChatConfig {
                api_key: "sk-test".to_string(),
                ..Default::default()
            },
            "prompt",
        );
        let status = session_status_text(&session);
        assert!(status.contains("10 of 10"));
    }
}
