//! `termfolio init` — initialize configuration and profile template.

use anyhow::Result;
use colored::Colorize;

use termfolio_core::config::{load_config, save_config};
use termfolio_core::utils::get_data_path;

/// Run the init command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "▞ termfolio — Setup".cyan().bold());
    println!();

    let data_dir = get_data_path();
    let config_path = data_dir.join("config.json");
    let profile_path = data_dir.join("profile.md");

    // 1. Create config if it doesn't exist
    if config_path.exists() {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        let mut config = load_config(None); // defaults + env
        config.persona.profile = Some(profile_path.to_string_lossy().into_owned());
        save_config(&config, Some(&config_path))?;
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    }

    // 2. Profile template
    if profile_path.exists() {
        println!("  {} profile.md already exists", "✓".green());
    } else {
        std::fs::write(&profile_path, PROFILE_TEMPLATE)?;
        println!(
            "  {} created profile template at {}",
            "✓".green(),
            profile_path.display()
        );
    }

    // 3. Input history directory
    std::fs::create_dir_all(data_dir.join("history"))?;

    println!();
    println!(
        "{}",
        "  Setup complete! Set an API key in config.json (or TERMFOLIO_CHAT__API_KEY),\n  \
         then run `termfolio term` to open the terminal."
            .green()
    );
    println!();

    Ok(())
}

/// Written to `~/.termfolio/profile.md` on first init. The content feeds
/// the assistant's system prompt — edit it to describe yourself.
const PROFILE_TEMPLATE: &str = "\
# Profile

Describe yourself here. The assistant reads this file before every
conversation, so whatever you write is what it knows about you.

## Background

- Where you're based, what you work on

## Projects

- Your featured work, one bullet per project

## Contact

- How to reach you
";
