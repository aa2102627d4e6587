//! Contacts CLI - view and update contacts from the terminal
//!
//! Thin client over the Contacts API.

mod api;
mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Password};
use tracing_subscriber::EnvFilter;

use api::{ContactResponse, ContactsClient, EditContactForm};
use config::Config;
use contacts::{confirm_then_destroy, AssumeYes, Confirmer, DestroyOutcome, DisplayName};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Contacts CLI - view, favourite, edit and delete contacts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store API key (and optionally the server URL)
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Server base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show a contact
    Show {
        /// Contact ID
        id: String,
    },

    /// Submit the favourite form with a raw value ("true" stars, anything else unstars)
    Favourite {
        /// Contact ID
        id: String,
        /// Raw form value, sent as-is
        value: String,
    },

    /// Flip the favourite flag
    Toggle {
        /// Contact ID
        id: String,
    },

    /// Edit contact details
    Edit {
        /// Contact ID
        id: String,
        #[arg(long)]
        first: Option<String>,
        #[arg(long)]
        last: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        /// X handle, without the leading @
        #[arg(long)]
        handle: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a contact (asks for confirmation)
    Delete {
        /// Contact ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration
    Config,
}

/// Terminal yes/no prompt, defaulting to "no"
struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        answer_or_decline(
            Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact(),
        )
    }
}

/// A prompt that could not be shown counts as "no"
fn answer_or_decline(answer: dialoguer::Result<bool>) -> bool {
    answer.unwrap_or_else(|e| {
        tracing::warn!("Confirmation prompt failed, treating as declined: {}", e);
        false
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, base_url } => cmd_login(key, base_url).await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Favourite { id, value } => cmd_favourite(id, value).await,
        Commands::Toggle { id } => cmd_toggle(id).await,
        Commands::Edit { id, first, last, avatar, handle, notes } => {
            let form = EditContactForm { first, last, avatar, handle, notes };
            cmd_edit(id, form).await
        }
        Commands::Delete { id, yes } => cmd_delete(id, yes).await,
        Commands::Config => cmd_config(),
    }
}

fn client_from(config: &Config) -> ContactsClient {
    ContactsClient::new(&config.base_url, config.api_key.as_deref())
}

fn contact_label(contact: &ContactResponse) -> String {
    DisplayName::from_parts(contact.first.as_deref(), contact.last.as_deref()).to_string()
}

fn favourite_glyph(favourite: bool) -> &'static str {
    if favourite {
        "★"
    } else {
        "☆"
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>, base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    let client = ContactsClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Contacts API at {}", config.base_url);
        }
    }

    config.api_key = Some(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_show(id: String) -> Result<()> {
    let config = Config::load()?;
    let page = client_from(&config).get_contact(&id).await?;

    for line in render::render_lines(&page.view) {
        println!("{}", line);
    }
    println!(
        "\n  {} {}",
        page.contact.id.dimmed(),
        format!("updated {}", page.contact.updated_at.format("%Y-%m-%d %H:%M")).dimmed()
    );

    Ok(())
}

async fn cmd_favourite(id: String, value: String) -> Result<()> {
    let config = Config::load()?;
    let contact = client_from(&config).set_favourite(&id, &value).await?;

    println!(
        "{} {} {}",
        "✓".green(),
        contact_label(&contact).cyan(),
        favourite_glyph(contact.favourite).yellow()
    );

    Ok(())
}

async fn cmd_toggle(id: String) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config);

    let page = client.get_contact(&id).await?;
    let button = page
        .view
        .favourite_button()
        .context("Contact view has no favourite control")?;

    let contact = client.set_favourite(&id, &button.submit_value).await?;

    println!(
        "{} {} {}",
        "✓".green(),
        contact_label(&contact).cyan(),
        favourite_glyph(contact.favourite).yellow()
    );

    Ok(())
}

async fn cmd_edit(id: String, form: EditContactForm) -> Result<()> {
    let config = Config::load()?;
    let contact = client_from(&config).edit_contact(&id, &form).await?;

    println!("{} Updated {}", "✓".green(), contact_label(&contact).cyan());

    Ok(())
}

async fn cmd_delete(id: String, yes: bool) -> Result<()> {
    let config = Config::load()?;
    let client = client_from(&config);

    let confirmer: &dyn Confirmer = if yes { &AssumeYes } else { &TerminalConfirmer };

    match confirm_then_destroy(confirmer, || client.destroy_contact(&id)).await? {
        DestroyOutcome::Destroyed => println!("{} Contact {} deleted", "✓".green(), id),
        DestroyOutcome::Cancelled => println!("{}", "Cancelled - nothing deleted".dimmed()),
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_prompt_failure_declines() {
        let err = dialoguer::Error::from(io::Error::new(io::ErrorKind::Other, "not a terminal"));
        assert!(!answer_or_decline(Err(err)));
    }

    #[test]
    fn test_prompt_answer_passes_through() {
        assert!(answer_or_decline(Ok(true)));
        assert!(!answer_or_decline(Ok(false)));
    }
}
