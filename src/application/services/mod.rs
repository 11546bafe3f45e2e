//! Business logic services for the application layer.
//!
//! [`ShortenerService`] is the core implementation of [`UrlShortener`];
//! [`BlacklistShortener`] decorates any `UrlShortener` with URL pattern checks.

pub mod blacklist;
pub mod shortener_service;
pub mod url_shortener;

pub use blacklist::BlacklistShortener;
pub use shortener_service::ShortenerService;
pub use url_shortener::UrlShortener;

#[cfg(test)]
pub use url_shortener::MockUrlShortener;
