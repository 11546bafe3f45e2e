//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the [`services::UrlShortener`]
//! capability to the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::ShortenerService`] - Code generation, expiry, hit counting, listing
//! - [`services::BlacklistShortener`] - Pattern-based URL blocking decorator

pub mod services;
