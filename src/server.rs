//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, the shortener decorator stack and the Axum
//! server lifecycle.

use crate::application::services::{BlacklistShortener, ShortenerService, UrlShortener};
use crate::config::Config;
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::cache::{CacheStore, CachedShortUrlRepository, MemoryCacheStore, NullCache};
use crate::infrastructure::persistence::{MemoryShortUrlRepository, PgShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
    connect_timeout: Duration,
) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(connect_timeout)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    info!("Migrations applied");

    Ok(pool)
}

/// Selects the storage backend: PostgreSQL when a database URL is configured,
/// the in-process repository otherwise.
///
/// # Errors
///
/// Propagates [`connect_database`] failures.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn ShortUrlRepository>> {
    match &config.database_url {
        Some(url) => {
            let pool = connect_database(
                url,
                config.db_max_connections,
                Duration::from_secs(config.db_connect_timeout),
            )
            .await?;
            Ok(Arc::new(PgShortUrlRepository::new(Arc::new(pool))))
        }
        None => {
            warn!("No database configured, records are kept in memory only");
            Ok(Arc::new(MemoryShortUrlRepository::new()))
        }
    }
}

/// Composes the shortener stack over `repository`:
/// blacklist → service → cached repository → storage.
///
/// # Errors
///
/// Returns an error if a blacklist pattern fails to compile.
pub fn build_shortener(
    repository: Arc<dyn ShortUrlRepository>,
    cache_enabled: bool,
    blacklist: &[String],
) -> Result<Arc<dyn UrlShortener>> {
    let cache: Arc<dyn CacheStore> = if cache_enabled {
        info!("Lookup cache enabled (in-memory)");
        Arc::new(MemoryCacheStore::new())
    } else {
        info!("Lookup cache disabled");
        Arc::new(NullCache::new())
    };

    let cached = Arc::new(CachedShortUrlRepository::new(repository, cache));
    let service = Arc::new(ShortenerService::new(cached));
    let shortener = BlacklistShortener::new(service, blacklist)
        .context("Failed to compile blacklist")?;
    info!(patterns = shortener.pattern_count(), "Blacklist loaded");

    Ok(Arc::new(shortener))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations (or the in-memory repository)
/// - Lookup cache
/// - Blacklist
/// - Axum HTTP server, shut down gracefully on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - A blacklist pattern is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let shortener = build_shortener(repository, config.cache_enabled, &config.blacklist)?;

    let state = AppState::new(shortener, &config.server_host, &config.admin_token);
    let app = app_router(state);

    let addr = parse_listen_addr(&config.listen_addr)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn parse_listen_addr(raw: &str) -> Result<SocketAddr> {
    raw.parse()
        .with_context(|| format!("Invalid LISTEN address: {raw}"))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listen_addr() {
        let addr = parse_listen_addr("127.0.0.1:8080").unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_parse_listen_addr_error_names_variable() {
        let err = parse_listen_addr("localhost").unwrap_err();
        assert_eq!(err.to_string(), "Invalid LISTEN address: localhost");
    }

    #[test]
    fn test_build_shortener_rejects_invalid_blacklist() {
        let repository = Arc::new(MemoryShortUrlRepository::new());
        let result = build_shortener(repository, true, &["(unclosed".to_string()]);
        assert!(result.is_err());
    }
}
