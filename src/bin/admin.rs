//! CLI administration tool for url-shortener.
//!
//! Manages short URLs directly against the configured database, through the
//! same service stack as the HTTP server (blacklist included).
//!
//! # Usage
//!
//! ```bash
//! # List short URLs
//! cargo run --bin admin -- list --size 50 --keyword example
//!
//! # Create a short URL that expires in one hour
//! cargo run --bin admin -- create https://example.com/page --expires-in 3600
//!
//! # Expire a short URL
//! cargo run --bin admin -- delete Xq3tLw9ZpR2aKb7c
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST` and friends, required): PostgreSQL connection
//! - `BLACKLIST` (optional): comma-separated blocked URL patterns
//! - `SERVER_HOST` (optional): prefix used when printing created short URLs

use url_shortener_core::application::services::UrlShortener;
use url_shortener_core::config::{Config, parse_blacklist};
use url_shortener_core::domain::entities::{FindParams, ShortUrlFilter, ShortUrlInput};
use url_shortener_core::infrastructure::persistence::PgShortUrlRepository;
use url_shortener_core::server::{build_shortener, connect_database};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing url-shortener.
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
    /// List short URLs
    List {
        #[arg(long, default_value_t = 0)]
        offset: i64,

        #[arg(long, default_value_t = 30)]
        size: i64,

        /// Exact short code
        #[arg(long)]
        code: Option<String>,

        /// Substring of the domain
        #[arg(long)]
        keyword: Option<String>,
    },

    /// Create a short URL
    Create {
        url: String,

        /// Lifetime in seconds, 0 for never
        #[arg(short, long, default_value_t = 0)]
        expires_in: i64,
    },

    /// Expire a short URL
    Delete {
        code: String,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?
        .context("DATABASE_URL (or DB_HOST) must be set")?;

    let pool = connect_database(&database_url, 2, Duration::from_secs(10)).await?;

    match cli.command {
        Commands::List {
            offset,
            size,
            code,
            keyword,
        } => list_urls(shortener(pool)?, offset, size, code, keyword).await?,
        Commands::Create { url, expires_in } => {
            create_url(shortener(pool)?, url, expires_in).await?
        }
        Commands::Delete { code, yes } => delete_url(shortener(pool)?, code, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn shortener(pool: PgPool) -> Result<Arc<dyn UrlShortener>> {
    let blacklist = std::env::var("BLACKLIST")
        .map(|v| parse_blacklist(&v))
        .unwrap_or_default();

    let repository = Arc::new(PgShortUrlRepository::new(Arc::new(pool)));
    build_shortener(repository, false, &blacklist)
}

/// Lists short URLs in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs
///
///   Code              Hits    Expires              URL
///   ─────────────────────────────────────────────────────────────────────────
///   Xq3tLw9ZpR2aKb7c  12      never                https://example.com/page
/// ```
async fn list_urls(
    shortener: Arc<dyn UrlShortener>,
    offset: i64,
    size: i64,
    code: Option<String>,
    keyword: Option<String>,
) -> Result<()> {
    println!("{}", "📋 Short URLs".bright_blue().bold());
    println!();

    let result = shortener
        .find_urls(FindParams {
            offset,
            size,
            filter: Some(ShortUrlFilter { code, keyword }),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if result.data.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<17} {:<7} {:<20} {}",
        "Code".bright_white().bold(),
        "Hits".bright_white().bold(),
        "Expires".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for short_url in &result.data {
        let expires = match short_url.expires_at {
            Some(at) if short_url.is_expired() => {
                at.format("%Y-%m-%d %H:%M").to_string().red()
            }
            Some(at) => at.format("%Y-%m-%d %H:%M").to_string().normal(),
            None => "never".bright_black(),
        };

        println!(
            "  {:<17} {:<7} {:<20} {}",
            short_url.code.cyan(),
            short_url.hit_count,
            expires,
            short_url.full_url
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        result.data.len().to_string().bright_white().bold(),
        result.total_count.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn create_url(shortener: Arc<dyn UrlShortener>, url: String, expires_in: i64) -> Result<()> {
    println!("{}", "🔗 Create Short URL".bright_blue().bold());
    println!();

    let code = shortener
        .create(ShortUrlInput::new(url.clone(), expires_in))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short URL: {}", e))?;

    let short_url = match std::env::var("SERVER_HOST") {
        Ok(host) => format!("{}/{}", host.trim_end_matches('/'), code),
        Err(_) => code,
    };

    println!("{}", "✅ Short URL created".green().bold());
    println!("  URL:   {}", url.cyan());
    println!("  Short: {}", short_url.bright_yellow().bold());
    println!();

    Ok(())
}

/// Expires a short URL after confirmation (default: No).
async fn delete_url(shortener: Arc<dyn UrlShortener>, code: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Short URL".bright_blue().bold());
    println!();
    println!("  Code: {}", code.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Expire this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    shortener
        .delete(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete short URL: {}", e))?;

    println!("{}", "✅ Short URL expired".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Short URLs: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}
