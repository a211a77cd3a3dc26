//! `termfolio status` — show configuration and provider status.

use anyhow::Result;
use colored::Colorize;

use termfolio_core::config::{get_config_path, load_config};
use termfolio_core::utils::expand_home;

/// Run the status command.
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "▞ termfolio Status".cyan().bold());
    println!();

    // Config
    let config_exists = config_path.exists();
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Persona
    println!("  {:<18} {}", "Persona:".bold(), config.persona.name);
    match &config.persona.profile {
        Some(profile) => {
            let path = expand_home(profile);
            println!(
                "  {:<18} {} {}",
                "Profile:".bold(),
                path.display(),
                if path.is_file() {
                    "✓".green().to_string()
                } else {
                    "(not found)".red().to_string()
                }
            );
        }
        None => println!("  {:<18} {}", "Profile:".bold(), "· not set".dimmed()),
    }

    // Chat
    println!();
    println!("  {}", "Assistant:".bold());
    println!("    {:<16} {}", "Provider:", config.chat.provider);
    println!("    {:<16} {}", "Model:", config.chat.model);
    println!(
        "    {:<16} {}",
        "Base URL:",
        config.chat.base_url.as_deref().unwrap_or("(provider default)")
    );
    let key_status = if config.chat.is_configured() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("    {:<16} {}", "API key:", key_status);
    println!(
        "    {:<16} {} turns, {} history messages",
        "Limits:", config.chat.max_turns, config.chat.history_window
    );

    println!();

    Ok(())
}
