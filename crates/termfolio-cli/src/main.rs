//! termfolio CLI — entry point.
//!
//! # Commands
//!
//! - `termfolio term [-m MESSAGE]` — open the portfolio terminal
//!   (interactive REPL, or single question with `-m`)
//! - `termfolio init` — initialize config and profile template
//! - `termfolio status` — show configuration and provider status

mod commands;
mod helpers;
mod init;
mod repl;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use termfolio_chat::{build_system_prompt, ChatSession};
use termfolio_core::config::{load_config, Config};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// ▞ termfolio — a portfolio that lives in your terminal
#[derive(Parser)]
#[command(name = "termfolio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio terminal (interactive, or single question)
    Term {
        /// Single question (non-interactive). Omit for the REPL.
        #[arg(short, long)]
        message: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Initialize configuration and profile template
    Init,

    /// Show configuration and provider status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Term { message, logs } => {
            init_logging(logs);
            run_term(message).await
        }
        Commands::Init => init::run(),
        Commands::Status => status::run(),
    }
}

// ─────────────────────────────────────────────
// Term command
// ─────────────────────────────────────────────

async fn run_term(message: Option<String>) -> Result<()> {
    let config = load_config(None);
    let mut session = build_session(&config);

    match message {
        Some(msg) => {
            // Single-shot mode
            info!("processing single question");
            match session.submit(&msg).await {
                Ok(reply) => helpers::print_reply(&reply),
                Err(e) => helpers::print_chat_error(&e),
            }
        }
        None => {
            // Interactive terminal
            repl::run(session, &config.persona.name).await?;
        }
    }

    Ok(())
}

/// Build a fresh `ChatSession` from the loaded configuration.
fn build_session(config: &Config) -> ChatSession {
    let system_prompt = build_system_prompt(&config.persona);
    ChatSession::new(config.chat.clone(), system_prompt)
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("termfolio=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
