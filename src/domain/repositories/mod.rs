//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract consumed by the core service. Concrete
//! backends live in `crate::infrastructure::persistence`, and the caching
//! decorator in `crate::infrastructure::cache` implements the same trait so it
//! can wrap any backend transparently.

pub mod short_url_repository;

pub use short_url_repository::ShortUrlRepository;

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
