//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored code → URL mapping
//! - [`NewShortUrl`] - Data for persisting a new record
//! - [`ShortUrlInput`] - Caller input for the create flow
//! - [`FindParams`] / [`FindResult`] / [`ShortUrlFilter`] - Listing queries

pub mod listing;
pub mod short_url;

pub use listing::{FindParams, FindResult, ShortUrlFilter};
pub use short_url::{NewShortUrl, ShortUrl, ShortUrlInput};
