use std::sync::Arc;

use crate::application::services::UrlShortener;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Fully decorated shortener stack.
    pub shortener: Arc<dyn UrlShortener>,
    /// Prefix of returned short URLs, without trailing slash.
    pub server_host: Arc<str>,
    pub admin_token: Arc<str>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn UrlShortener>,
        server_host: impl AsRef<str>,
        admin_token: impl AsRef<str>,
    ) -> Self {
        Self {
            shortener,
            server_host: server_host.as_ref().trim_end_matches('/').into(),
            admin_token: admin_token.as_ref().into(),
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.server_host, code)
    }
}
