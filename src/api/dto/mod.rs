//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; query parameters are validated
//! with `validator`.

pub mod health;
pub mod pagination;
pub mod short_url;
pub mod shorten;
