//! CLI administration tool for url-alias.
//!
//! Works directly against the SQLite store, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Save a mapping (alias generated when omitted)
//! cargo run --bin admin -- save https://google.com --alias google
//!
//! # Look up an alias
//! cargo run --bin admin -- resolve google
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete google
//!
//! # Check the database
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH`: SQLite file (default: `./storage/storage.db`), overridable with `--storage`
//! - `ALIAS_LENGTH`: length of generated aliases (default: 6)

use url_alias::application::services::UrlService;
use url_alias::config;
use url_alias::error::{SaveError, StorageError};
use url_alias::infrastructure::persistence::SqliteUrlRepository;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides STORAGE_PATH)
    #[arg(short, long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Save a URL under an alias
    Save {
        /// Target URL
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Resolve { alias: String },

    /// Delete the mapping for an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the database, apply the schema, and ping it
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }
    config.validate()?;

    let repository = SqliteUrlRepository::connect(&config.sqlite_options())
        .await
        .with_context(|| format!("Failed to open storage at '{}'", config.storage_path))?;
    let service = UrlService::new(Arc::new(repository), config.alias_length);

    match cli.command {
        Commands::Save { url, alias } => save(&service, &url, alias.as_deref()).await?,
        Commands::Resolve { alias } => resolve(&service, &alias).await?,
        Commands::Delete { alias, yes } => delete(&service, &alias, yes).await?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check(&service, &config.storage_path).await?,
        },
    }

    Ok(())
}

async fn save(
    service: &UrlService<SqliteUrlRepository>,
    url: &str,
    alias: Option<&str>,
) -> Result<()> {
    match service.save(url, alias).await {
        Ok(alias) => {
            println!("{}", "✅ Mapping saved".green().bold());
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!("  URL:   {}", url.cyan());
            Ok(())
        }
        Err(SaveError::Conflict { alias }) => {
            println!(
                "{} alias {} is already taken",
                "❌".red(),
                alias.bright_yellow()
            );
            bail!("alias '{}' is already taken", alias)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to save mapping")),
    }
}

async fn resolve(service: &UrlService<SqliteUrlRepository>, alias: &str) -> Result<()> {
    match service.resolve(alias).await {
        Ok(url) => {
            println!("{} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(StorageError::NotFound { .. }) => {
            println!("{} alias {} not found", "❌".red(), alias.bright_yellow());
            bail!("alias '{}' not found", alias)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to resolve alias")),
    }
}

/// Deletes a mapping after showing it and asking for confirmation.
async fn delete(
    service: &UrlService<SqliteUrlRepository>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    let url = match service.resolve(alias).await {
        Ok(url) => url,
        Err(StorageError::NotFound { .. }) => {
            println!("{} alias {} not found", "❌".red(), alias.bright_yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to look up alias")),
    };

    println!("{}", "Mapping to delete:".bright_white().bold());
    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.delete(alias).await {
        Ok(()) => println!("{}", "✅ Mapping deleted".green().bold()),
        // Deleted by someone else between lookup and delete
        Err(StorageError::NotFound { .. }) => {
            println!("{} alias {} not found", "❌".red(), alias.bright_yellow())
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to delete mapping")),
    }

    Ok(())
}

async fn db_check(service: &UrlService<SqliteUrlRepository>, path: &str) -> Result<()> {
    println!("{}", "🔍 Checking database".bright_blue().bold());

    service
        .ping()
        .await
        .map_err(|e| anyhow::Error::new(e).context("Database ping failed"))?;

    println!("  File:   {}", path.cyan());
    println!("  Schema: {}", "up to date".green());
    println!("{}", "✅ Database OK".green().bold());

    Ok(())
}
