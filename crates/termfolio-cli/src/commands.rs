//! Slash-command parsing and the static portfolio sections.
//!
//! Input routing: a leading `/` selects a command (first token,
//! case-insensitive); anything else is a question for the AI assistant.

use colored::Colorize;

/// One line of visitor input, classified.
#[derive(Debug, PartialEq)]
pub enum Input {
    Empty,
    Command(TermCommand),
    Question(String),
}

/// The slash commands the terminal understands.
#[derive(Debug, PartialEq)]
pub enum TermCommand {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Clear,
    Status,
    Unknown(String),
}

/// Classify a line of input.
pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Input::Question(trimmed.to_string());
    };

    let Some(cmd) = rest.split_whitespace().next() else {
        return Input::Empty;
    };

    let command = match cmd.to_lowercase().as_str() {
        "help" => TermCommand::Help,
        "about" => TermCommand::About,
        "skills" => TermCommand::Skills,
        "projects" => TermCommand::Projects,
        "contact" => TermCommand::Contact,
        "clear" => TermCommand::Clear,
        "status" => TermCommand::Status,
        other => TermCommand::Unknown(other.to_string()),
    };

    Input::Command(command)
}

// ─────────────────────────────────────────────
// Static sections
// ─────────────────────────────────────────────

pub fn help_text() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "AVAILABLE COMMANDS".cyan().bold()));
    for (cmd, desc) in [
        ("/help", "Show this help message"),
        ("/about", "About me, experience & education"),
        ("/skills", "Technical skills & tools"),
        ("/projects", "Featured projects"),
        ("/contact", "Get in touch"),
        ("/status", "Session and assistant status"),
        ("/clear", "Clear terminal"),
    ] {
        out.push_str(&format!("  {:<12} {}\n", cmd.green(), desc));
    }
    out.push_str(&format!(
        "\n{}\n",
        "Anything without a leading slash goes to the AI assistant.".dimmed()
    ));
    out
}

pub fn about_text() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "ABOUT ME".cyan().bold()));
    out.push_str(&format!(
        "Hi! I'm {}, a backend engineer based in Wellington, New Zealand.\n\n",
        "Rowan Hale".green()
    ));
    out.push_str(
        "I build network services and developer tooling, mostly in Rust.\n\
         I care about software that stays understandable after the person\n\
         who wrote it has moved on.\n\n",
    );

    out.push_str(&format!("{}\n", "EXPERIENCE".cyan().bold()));
    out.push_str(&format!(
        "{}\n",
        "[ Senior Backend Engineer · 2021-present ]".yellow()
    ));
    out.push_str("  Fernline Systems\n");
    out.push_str("  Event-ingestion pipeline handling ~40k msgs/s; led the\n");
    out.push_str("  migration from a Python prototype to Rust services.\n\n");

    out.push_str(&format!("{}\n", "[ Platform Engineer · 2017-2021 ]".yellow()));
    out.push_str("  Harbourview Digital\n");
    out.push_str("  Internal deploy tooling, observability stack, on-call\n");
    out.push_str("  automation for a 30-service platform.\n\n");

    out.push_str(&format!("{}\n", "EDUCATION".cyan().bold()));
    out.push_str(&format!(
        "  {} · Victoria University of Wellington (2016)\n",
        "BSc Computer Science".green()
    ));
    out
}

pub fn skills_text() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "TECHNICAL SKILLS".cyan().bold()));
    for (area, items) in [
        ("Languages", "Rust · Go · Python · SQL"),
        (
            "Backend",
            "tokio · axum · gRPC · PostgreSQL · Redis · Kafka",
        ),
        ("Infrastructure", "AWS · Kubernetes · Terraform · Grafana"),
        ("Practices", "Property testing · Tracing-first debugging · RFC-driven design"),
    ] {
        out.push_str(&format!("{}\n  {}\n", area.green(), items));
    }
    out
}

pub fn projects_text() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "FEATURED PROJECTS".cyan().bold()));

    out.push_str(&format!("{}\n", "[ driftwatch ]".yellow()));
    out.push_str("  CLI that diffs deployed infrastructure against Terraform\n");
    out.push_str("  state and reports drift as annotated plans.\n");
    out.push_str(&format!(
        "  {} github.com/rowanhale/driftwatch\n\n",
        "→".green()
    ));

    out.push_str(&format!("{}\n", "[ quayside ]".yellow()));
    out.push_str("  Lightweight job queue on PostgreSQL with exactly-once\n");
    out.push_str("  delivery semantics; used in production at Fernline.\n");
    out.push_str(&format!(
        "  {} github.com/rowanhale/quayside\n\n",
        "→".green()
    ));

    out.push_str(&format!("{}\n", "[ termfolio ]".yellow()));
    out.push_str("  This terminal — a portfolio you can talk to, backed by a\n");
    out.push_str("  multi-provider AI client.\n");
    out.push_str(&format!(
        "  {} github.com/rowanhale/termfolio\n\n",
        "→".green()
    ));

    out.push_str(&format!(
        "Run {} to discuss potential collaborations.\n",
        "/contact".green()
    ));
    out
}

pub fn contact_text() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "GET IN TOUCH".cyan().bold()));
    for (label, value) in [
        ("Email", "rowan@termfolio.dev"),
        ("GitHub", "github.com/rowanhale"),
        ("Mastodon", "@rowanhale@hachyderm.io"),
        ("Location", "Wellington, New Zealand"),
    ] {
        out.push_str(&format!("  {:<10} {} {}\n", label.green(), "→".dimmed(), value));
    }
    out.push_str("\nOpen to backend and infrastructure roles. Let's build something solid.\n");
    out
}

pub fn unknown_text(cmd: &str) -> String {
    format!(
        "Command not found: {}\nType {} for available commands.\n",
        cmd.red(),
        "/help".green()
    )
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
