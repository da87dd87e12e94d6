//! CLI administration tool for url-alias.
//!
//! Manages alias mappings and checks the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a mapping
//! cargo run --bin admin -- url save https://example.com ex
//!
//! # Resolve an alias
//! cargo run --bin admin -- url get ex
//!
//! # Delete a mapping (asks for confirmation unless -y)
//! cargo run --bin admin -- url delete ex
//!
//! # Check database connection / create the schema
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use url_alias::api::dto::save::SaveRequest;
use url_alias::config::Config;
use url_alias::domain::repositories::{StorageError, UrlStorage};
use url_alias::infrastructure::persistence::PostgresStorage;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// PostgreSQL `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage alias mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a new mapping
    Save {
        /// Destination URL
        url: String,

        /// Alias to store it under
        alias: String,
    },

    /// Print the URL an alias points to
    Get { alias: String },

    /// Delete a mapping
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the `url` table and index if missing
    Init,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Url { action } => {
            let storage = PostgresStorage::connect(&config.database_url, &config.pool_settings())
                .await
                .context("Failed to initialize storage")?;
            handle_url_action(action, &storage).await?
        }
        Commands::Db { action } => {
            let pool = PgPool::connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            handle_db_action(action, PostgresStorage::new(Arc::new(pool))).await?
        }
    }

    Ok(())
}

/// Dispatches mapping commands.
async fn handle_url_action(action: UrlAction, storage: &PostgresStorage) -> Result<()> {
    match action {
        UrlAction::Save { url, alias } => save_url(storage, url, alias).await,
        UrlAction::Get { alias } => get_url(storage, alias).await,
        UrlAction::Delete { alias, yes } => delete_url(storage, alias, yes).await,
    }
}

/// Applies the same rules as `POST /url`: a valid URL and a 1-255 character alias.
fn validated_mapping(url: String, alias: String) -> Result<SaveRequest> {
    let req = SaveRequest { url, alias };
    req.validate()
        .with_context(|| format!("Invalid mapping '{}' → '{}'", req.alias, req.url))?;
    Ok(req)
}

async fn save_url(storage: &PostgresStorage, url: String, alias: String) -> Result<()> {
    let SaveRequest { url, alias } = validated_mapping(url, alias)?;

    match storage.create_mapping(&url, &alias).await {
        Ok(()) => {
            println!("{}", "✅ Mapping saved".green().bold());
            println!("  {} → {}", alias.cyan(), url.bright_white());
            Ok(())
        }
        Err(StorageError::DuplicateAlias { .. }) => {
            println!("{}", format!("⚠️  Alias '{alias}' already exists").yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to save mapping"),
    }
}

async fn get_url(storage: &PostgresStorage, alias: String) -> Result<()> {
    match storage.get_mapping(&alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.cyan(), url.bright_white());
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", format!("  No mapping for '{alias}'").yellow());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to read mapping"),
    }
}

/// Deletes a mapping, asking for confirmation unless `skip_confirm` is set.
async fn delete_url(storage: &PostgresStorage, alias: String, skip_confirm: bool) -> Result<()> {
    let url = match storage.get_mapping(&alias).await {
        Ok(url) => url,
        Err(e) if e.is_not_found() => {
            println!("{}", format!("  No mapping for '{alias}'").yellow());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read mapping"),
    };

    println!("  Alias: {}", alias.cyan());
    println!("  URL:   {}", url.bright_black());
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

    storage
        .delete_mapping(&alias)
        .await
        .context("Failed to delete mapping")?;

    println!("{}", "✅ Mapping deleted".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, storage: PostgresStorage) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            storage.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Init => {
            storage.init_schema().await?;

            println!("{}", "✅ Schema ready".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(storage.pool())
                .await?;

            let mappings: Option<i64> = match sqlx::query_scalar("SELECT COUNT(*) FROM url")
                .fetch_one(storage.pool())
                .await
            {
                Ok(count) => Some(count),
                Err(e) if is_undefined_table(&e) => None,
                Err(e) => return Err(e).context("Failed to count mappings"),
            };

            println!("  PostgreSQL: {}", version.bright_white());
            match mappings {
                Some(count) => println!(
                    "  Mappings:   {}",
                    count.to_string().bright_green().bold()
                ),
                None => println!("  Mappings:   {}", "schema not initialized".yellow()),
            }
            println!();
        }
    }

    Ok(())
}

fn is_undefined_table(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNDEFINED_TABLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_mapping_accepts_valid_input() {
        let req = validated_mapping("https://example.com".to_string(), "ex".to_string()).unwrap();
        assert_eq!(req.url, "https://example.com");
        assert_eq!(req.alias, "ex");
    }

    #[test]
    fn test_validated_mapping_rejects_empty_and_oversized_alias() {
        assert!(validated_mapping("https://example.com".to_string(), String::new()).is_err());
        assert!(validated_mapping("https://example.com".to_string(), "a".repeat(256)).is_err());
        assert!(validated_mapping("https://example.com".to_string(), "a".repeat(255)).is_ok());
    }

    #[test]
    fn test_validated_mapping_rejects_bad_url() {
        assert!(validated_mapping("not a url".to_string(), "ex".to_string()).is_err());
    }

    #[test]
    fn test_only_database_errors_can_be_undefined_table() {
        assert!(!is_undefined_table(&sqlx::Error::PoolTimedOut));
        assert!(!is_undefined_table(&sqlx::Error::RowNotFound));
    }
}
