//! CLI administration tool for shorturl.
//!
//! Inspects and manages mappings directly against the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show how many mappings exist and the next id to be assigned
//! cargo run --bin admin -- stats
//!
//! # Look up a mapping by id or by URL
//! cargo run --bin admin -- resolve 42
//! cargo run --bin admin -- find "https://example.com"
//!
//! # Check whether a URL would pass host validation
//! cargo run --bin admin -- check-host "https://example.com"
//!
//! # Submit a URL (same flow as POST /api/shorturl)
//! cargo run --bin admin -- submit "https://example.com"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `ALLOCATION_RETRIES`: retries used by `submit`

use shorturl::application::services::{HostValidator, MappingService};
use shorturl::config::Config;
use shorturl::domain::repositories::MappingStore;
use shorturl::infrastructure::dns::SystemResolver;
use shorturl::infrastructure::persistence::PgMappingStore;
use shorturl::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show mapping statistics
    Stats,

    /// Show the URL for a short id
    Resolve {
        /// Short id to look up
        short_id: i64,
    },

    /// Show the short id for a URL (exact match)
    Find {
        /// Original URL to look up
        url: String,
    },

    /// Resolve a URL's host without storing anything
    CheckHost {
        /// URL to check
        url: String,
    },

    /// Assign a short id to a URL
    Submit {
        /// URL to shorten
        url: String,

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
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::CheckHost { url } = &cli.command {
        return check_host(url).await;
    }

    let config = Config::from_env()?;
    config.validate()?;
    config.require_database_url()?;

    let pool = connect_pool(&config).await?;
    let store = Arc::new(PgMappingStore::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Stats => handle_stats(store).await?,
        Commands::Resolve { short_id } => resolve(store, short_id).await?,
        Commands::Find { url } => find(store, &url).await?,
        Commands::Submit { url, yes } => {
            submit(store, &url, config.allocation_retries, yes).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::CheckHost { .. } => {}
    }

    Ok(())
}

/// Displays mapping statistics.
async fn handle_stats(store: Arc<PgMappingStore>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("  Mappings: {}", count.to_string().bright_green().bold());
    println!(
        "  Next id:  {}",
        (count + 1).to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn resolve(store: Arc<PgMappingStore>, short_id: i64) -> Result<()> {
    let record = store
        .find_by_short_id(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match record {
        Some(record) => {
            println!(
                "  {} → {}",
                record.short_id.to_string().bright_yellow().bold(),
                record.original_url.cyan()
            );
        }
        None => println!("{}", format!("  No mapping with id {}", short_id).yellow()),
    }

    Ok(())
}

async fn find(store: Arc<PgMappingStore>, url: &str) -> Result<()> {
    let record = store
        .find_by_original_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match record {
        Some(record) => {
            println!(
                "  {} → {}",
                record.original_url.cyan(),
                record.short_id.to_string().bright_yellow().bold()
            );
        }
        None => println!("{}", "  URL has not been shortened".yellow()),
    }

    Ok(())
}

/// Runs host validation and prints the resolved addresses.
async fn check_host(url: &str) -> Result<()> {
    println!("{}", "🔍 Checking host...".bright_blue());

    let validator = HostValidator::new(Arc::new(SystemResolver::new()));

    match validator.inspect(url).await {
        Ok(addresses) => {
            println!("{}", "✅ Host resolves".green().bold());
            for address in addresses {
                println!("  {}", address.to_string().bright_white());
            }
        }
        Err(reason) => {
            println!("{}", format!("❌ Invalid URL: {}", reason).red().bold());
        }
    }

    Ok(())
}

/// Submits a URL after confirmation.
///
/// Goes through the same validation, lookup and allocation steps as the API.
async fn submit(
    store: Arc<PgMappingStore>,
    url: &str,
    allocation_retries: usize,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Submit URL".bright_blue().bold());
    println!();
    println!("  URL: {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Shorten this URL?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = MappingService::new(store, Arc::new(SystemResolver::new()))
        .with_allocation_retries(allocation_retries);

    let record = service
        .submit(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to submit URL: {}", e))?;

    println!(
        "{} {}",
        "✅ Short id:".green().bold(),
        record.short_id.to_string().bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let table_exists: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'url_mappings')",
            )
            .fetch_one(pool)
            .await
            .context("Failed to inspect schema")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Schema:     {}",
                if table_exists {
                    "migrated".green()
                } else {
                    "not migrated".yellow()
                }
            );
            println!();
        }
    }

    Ok(())
}
