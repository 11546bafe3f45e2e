//! Storage backends for short URL records.
//!
//! # Repositories
//!
//! - [`PgShortUrlRepository`] - PostgreSQL via SQLx
//! - [`MemoryShortUrlRepository`] - In-process backend used without a database

pub mod memory_short_url_repository;
pub mod pg_short_url_repository;

pub use memory_short_url_repository::MemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
