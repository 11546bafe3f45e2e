//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    #[serde(default)]
    pub url: String,

    /// Lifetime in seconds; `0` or absent means never expires.
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    /// Public short URL: `<SERVER_HOST>/<code>`.
    pub url: String,
}
